//! Persisted UI preferences.
//!
//! A single theme string is the only state kept across sessions. `Settings` is an
//! explicit object handed to the UI: it is initialised from storage once and every
//! change is written straight through to disk.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Label of the toggle button for the active theme.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "🌙 Dark Mode",
            Theme::Light => "☀ Light Mode",
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Stored {
    theme: Theme,
}

#[derive(Debug, Clone)]
pub struct Settings {
    path: PathBuf,
    theme: Theme,
}

impl Settings {
    /// Default location: `<config dir>/countries-rs/settings.json`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("countries-rs")
            .join("settings.json")
    }

    /// Read the stored theme; fall back to the system preference when nothing
    /// usable is stored.
    pub fn load(path: impl Into<PathBuf>, prefers_dark: bool) -> Self {
        let path = path.into();
        let stored = fs::read_to_string(&path)
            .ok()
            .and_then(|s| serde_json::from_str::<Stored>(&s).ok());
        let theme = match stored {
            Some(s) => s.theme,
            None => {
                debug!("no stored theme at {}; using system preference", path.display());
                if prefers_dark { Theme::Dark } else { Theme::Light }
            }
        };
        Self { path, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Change the theme and persist it immediately.
    pub fn set_theme(&mut self, theme: Theme) -> io::Result<()> {
        self.theme = theme;
        self.save()
    }

    pub fn toggle_theme(&mut self) -> io::Result<()> {
        self.set_theme(self.theme.toggle())
    }

    fn save(&self) -> io::Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let body = serde_json::to_string_pretty(&Stored { theme: self.theme })
            .map_err(io::Error::other)?;
        fs::write(&self.path, body).inspect_err(|e| {
            warn!("cannot persist theme to {}: {}", self.path.display(), e);
        })
    }
}
