//! Error handling for the dashboard data layer

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// The source could not produce a payload.
    #[error("Dashboard source unavailable: {0}")]
    Unavailable(String),

    /// The payload arrived but breaks a data invariant.
    #[error("Malformed dashboard payload: {0}")]
    Malformed(String),

    /// The fetch task ended without reporting a result.
    #[error("Fetch task stopped before delivering a result")]
    WorkerGone,
}
