//! Navigation surface: an index location and a per-country detail location.

use std::fmt;

/// A navigable location.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Index,
    /// Detail page; the code segment is kept verbatim.
    Country(String),
}

impl Route {
    /// Parse `/` or `/country/{code}`. Anything else is unknown.
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Some(Route::Index);
        }
        let code = trimmed.strip_prefix("/country/")?;
        if code.is_empty() || code.contains('/') {
            return None;
        }
        Some(Route::Country(code.to_string()))
    }

    pub fn path(&self) -> String {
        match self {
            Route::Index => "/".to_string(),
            Route::Country(code) => format!("/country/{}", code),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Browser-style history stack. `back` returns to the immediately prior location.
#[derive(Debug, Clone)]
pub struct History {
    stack: Vec<Route>,
}

impl Default for History {
    fn default() -> Self {
        Self::new(Route::Index)
    }
}

impl History {
    pub fn new(start: Route) -> Self {
        Self { stack: vec![start] }
    }

    pub fn current(&self) -> &Route {
        // The stack always holds at least the starting location.
        &self.stack[self.stack.len() - 1]
    }

    pub fn push(&mut self, route: Route) {
        self.stack.push(route);
    }

    /// Pop to the previous location; a no-op at the first entry.
    pub fn back(&mut self) -> &Route {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
        self.current()
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }
}
