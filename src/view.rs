//! Per-view load lifecycle.
//!
//! Each view owns one [`DatasetTask`]: a background worker that performs a single
//! load and hands the result back over a channel. The UI loop polls the task
//! without blocking. Cancelling (explicitly or by dropping the task) sets a shared
//! flag that both the worker and `poll` check before anything is committed, so a
//! late response never reaches a torn-down view.

use crate::api::Client;
use crate::browse::{self, CountryCard, Filter};
use crate::detail::{self, CountryDetail, Lookup};
use crate::error::{LOAD_FAILED_MESSAGE, LoadError};
use crate::models::Dataset;
use log::{debug, warn};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

/// Load status of a view.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    /// User-facing message; details go to the log.
    Failed(String),
    Ready(T),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(v) => Some(v),
            _ => None,
        }
    }

    fn from_result(result: Result<T, LoadError>) -> Self {
        match result {
            Ok(v) => LoadState::Ready(v),
            Err(err) => {
                warn!("dataset load failed: {}", err);
                LoadState::Failed(err.user_message().to_string())
            }
        }
    }
}

/// One in-flight dataset load bound to a view's lifetime.
///
/// The worker thread is detached. Cancelling only discards its result; a request
/// that never completes keeps its thread alive until the process exits.
#[derive(Debug)]
pub struct DatasetTask {
    receiver: Option<Receiver<Result<Dataset, LoadError>>>,
    cancelled: Arc<AtomicBool>,
}

impl DatasetTask {
    /// Start loading through `client` on a background thread.
    pub fn spawn(client: Client) -> Self {
        Self::spawn_with(move || client.load())
    }

    /// Start an arbitrary loader on a background thread.
    pub fn spawn_with<F>(load: F) -> Self
    where
        F: FnOnce() -> Result<Dataset, LoadError> + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel();
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);

        thread::spawn(move || {
            let result = load();
            if flag.load(Ordering::SeqCst) {
                debug!("view torn down before load finished; discarding result");
                return;
            }
            let _ = sender.send(result);
        });

        Self {
            receiver: Some(receiver),
            cancelled,
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Non-blocking check. `None` while the load is pending or after cancellation.
    pub fn poll(&mut self) -> Option<LoadState<Dataset>> {
        if self.is_cancelled() {
            return None;
        }
        let receiver = self.receiver.as_ref()?;
        match receiver.try_recv() {
            Ok(result) => {
                self.receiver = None;
                Some(LoadState::from_result(result))
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                // Worker died without reporting.
                self.receiver = None;
                warn!("dataset worker exited without a result");
                Some(LoadState::Failed(LOAD_FAILED_MESSAGE.to_string()))
            }
        }
    }

    /// Block until the load settles. Returns `None` if the task was cancelled.
    pub fn wait(mut self) -> Option<LoadState<Dataset>> {
        if self.is_cancelled() {
            return None;
        }
        let receiver = self.receiver.take()?;
        let state = match receiver.recv() {
            Ok(result) => LoadState::from_result(result),
            Err(_) => LoadState::Failed(LOAD_FAILED_MESSAGE.to_string()),
        };
        Some(state)
    }
}

impl Drop for DatasetTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Commit a polled result. `poll` yields nothing once the task is cancelled.
fn commit(task: &mut Option<DatasetTask>, state: &mut LoadState<Dataset>) -> bool {
    let Some(next) = task.as_mut().and_then(DatasetTask::poll) else {
        return false;
    };
    *state = next;
    *task = None;
    true
}

/// Block until the load settles and commit it. Used by non-interactive front ends.
fn settle(task: &mut Option<DatasetTask>, state: &mut LoadState<Dataset>) {
    if let Some(t) = task.take()
        && let Some(next) = t.wait()
    {
        *state = next;
    }
}

/// Search + region filter screen.
#[derive(Debug)]
pub struct ListView {
    state: LoadState<Dataset>,
    task: Option<DatasetTask>,
    pub query: String,
    pub region: String,
    pub locale: String,
}

impl ListView {
    /// Mount the view and start its own load.
    pub fn mount(client: Client) -> Self {
        Self::with_task(DatasetTask::spawn(client))
    }

    pub fn with_task(task: DatasetTask) -> Self {
        Self {
            state: LoadState::Loading,
            task: Some(task),
            query: String::new(),
            region: String::new(),
            locale: "en".to_string(),
        }
    }

    /// Pick up a finished load. Returns `true` when the state changed.
    pub fn update(&mut self) -> bool {
        commit(&mut self.task, &mut self.state)
    }

    /// Wait for the pending load, if any.
    pub fn settle(&mut self) {
        settle(&mut self.task, &mut self.state);
    }

    /// Stop listening for the load; no further state changes happen.
    pub fn teardown(&mut self) {
        if let Some(task) = self.task.take() {
            task.cancel();
        }
    }

    pub fn state(&self) -> &LoadState<Dataset> {
        &self.state
    }

    pub fn filter(&self) -> Filter {
        Filter::new(self.query.clone(), self.region.clone())
    }

    /// Region options; empty until the dataset is ready.
    pub fn regions(&self) -> Vec<&str> {
        self.state.ready().map(browse::regions).unwrap_or_default()
    }

    pub fn cards(&self) -> Vec<CountryCard> {
        match self.state.ready() {
            Some(dataset) => browse::cards(dataset, &self.filter(), &self.locale),
            None => Vec::new(),
        }
    }
}

/// What the detail screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailDisplay {
    Loading,
    Failed(String),
    NotFound,
    Found(CountryDetail),
}

/// Single-country screen keyed by an alpha-3 code.
#[derive(Debug)]
pub struct DetailView {
    code: String,
    state: LoadState<Dataset>,
    task: Option<DatasetTask>,
    pub locale: String,
}

impl DetailView {
    /// Mount the view for `code` and start its own load.
    pub fn mount(client: Client, code: impl Into<String>) -> Self {
        Self::with_task(DatasetTask::spawn(client), code)
    }

    pub fn with_task(task: DatasetTask, code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            state: LoadState::Loading,
            task: Some(task),
            locale: "en".to_string(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn update(&mut self) -> bool {
        commit(&mut self.task, &mut self.state)
    }

    pub fn settle(&mut self) {
        settle(&mut self.task, &mut self.state);
    }

    pub fn teardown(&mut self) {
        if let Some(task) = self.task.take() {
            task.cancel();
        }
    }

    pub fn state(&self) -> &LoadState<Dataset> {
        &self.state
    }

    pub fn display(&self) -> DetailDisplay {
        match &self.state {
            LoadState::Loading => DetailDisplay::Loading,
            LoadState::Failed(msg) => DetailDisplay::Failed(msg.clone()),
            LoadState::Ready(dataset) => match detail::lookup(dataset, &self.code, &self.locale) {
                Lookup::Found(d) => DetailDisplay::Found(d),
                Lookup::NotFound => DetailDisplay::NotFound,
            },
        }
    }
}
