//! Dashboard data sources
//!
//! `DashboardSource` is the seam a real backend client would implement. The
//! only shipped source serves the fixed mock payload after a simulated delay.

use super::{DashboardStats, StatsError, mock_payload};
use std::time::Duration;
use tokio::time::sleep;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait DashboardSource: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Fetch the dashboard statistics.
    async fn fetch(&self) -> Result<DashboardStats, StatsError>;
}

/// Serves the fixed mock payload.
#[derive(Debug, Clone)]
pub struct MockPayloadSource {
    delay: Duration,
}

impl MockPayloadSource {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// A source that answers without delay.
    pub fn immediate() -> Self {
        Self::new(Duration::ZERO)
    }
}

#[async_trait::async_trait]
impl DashboardSource for MockPayloadSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(&self) -> Result<DashboardStats, StatsError> {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        Ok(mock_payload())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_source_returns_the_fixed_payload() {
        let source = MockPayloadSource::immediate();
        let stats = source.fetch().await.unwrap();
        assert_eq!(stats, mock_payload());
        assert_eq!(source.name(), "mock");
    }

    #[tokio::test(start_paused = true)]
    async fn mock_source_waits_for_its_delay() {
        let source = MockPayloadSource::new(Duration::from_secs(5));
        let start = tokio::time::Instant::now();
        source.fetch().await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(5));
    }
}
