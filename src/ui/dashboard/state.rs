//! Dashboard view state
//!
//! Load state machine for the dashboard: Loading, then Loaded or Failed.
//! The fetch runs as a tokio task and reports back over a oneshot channel.
//! Dropping the view aborts the task and discards any late result.

use crate::stats::{DashboardSource, DashboardStats, StatsError};
use log::{debug, error, info};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio::task::JoinHandle;

type FetchResult = Result<DashboardStats, StatsError>;

/// Where the dashboard is in its load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading { started_at: Instant },
    Loaded(Box<DashboardStats>),
    /// Terminal until `retry` is called.
    Failed { error: StatsError },
}

pub struct DashboardView {
    source: Arc<dyn DashboardSource>,
    state: LoadState,
    pending: Option<oneshot::Receiver<FetchResult>>,
    task: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for DashboardView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardView")
            .field("source", &self.source.name())
            .field("state", &self.state)
            .finish()
    }
}

impl DashboardView {
    /// Mounts the view and starts its fetch. Must be called inside a tokio runtime.
    pub fn mount(source: Arc<dyn DashboardSource>) -> Self {
        let mut view = Self {
            source,
            state: LoadState::Loading {
                started_at: Instant::now(),
            },
            pending: None,
            task: None,
        };
        view.start_fetch();
        view
    }

    fn start_fetch(&mut self) {
        let (sender, receiver) = oneshot::channel();
        let source = Arc::clone(&self.source);
        debug!("Fetching dashboard statistics from {} source", source.name());

        let task = tokio::spawn(async move {
            let result = match source.fetch().await {
                Ok(stats) => stats.validate().map(|()| stats),
                Err(e) => Err(e),
            };
            if sender.send(result).is_err() {
                debug!("Dashboard view is gone, dropping fetch result");
            }
        });

        self.state = LoadState::Loading {
            started_at: Instant::now(),
        };
        self.pending = Some(receiver);
        self.task = Some(task);
    }

    /// Picks up a finished fetch. Returns true when the state changed.
    pub fn poll(&mut self) -> bool {
        let Some(receiver) = self.pending.as_mut() else {
            return false;
        };

        let elapsed = match &self.state {
            LoadState::Loading { started_at } => started_at.elapsed(),
            _ => Duration::ZERO,
        };

        let next = match receiver.try_recv() {
            Err(TryRecvError::Empty) => return false,
            Ok(Ok(stats)) => {
                info!("Dashboard statistics loaded in {:?}", elapsed);
                LoadState::Loaded(Box::new(stats))
            }
            Ok(Err(e)) => {
                error!("Failed to load dashboard statistics: {}", e);
                LoadState::Failed { error: e }
            }
            Err(TryRecvError::Closed) => {
                error!("Dashboard fetch task ended without a result");
                LoadState::Failed {
                    error: StatsError::WorkerGone,
                }
            }
        };

        self.state = next;
        self.pending = None;
        self.task = None;
        true
    }

    /// Restarts the fetch after a failure. No-op in any other state.
    pub fn retry(&mut self) -> bool {
        if matches!(self.state, LoadState::Failed { .. }) {
            info!("Retrying dashboard statistics fetch");
            self.start_fetch();
            true
        } else {
            false
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading { .. })
    }

    /// Loaded statistics, if any.
    pub fn stats(&self) -> Option<&DashboardStats> {
        match &self.state {
            LoadState::Loaded(stats) => Some(stats.as_ref()),
            _ => None,
        }
    }
}

impl Drop for DashboardView {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
