//! Driving port for the dashboard aggregate.

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::dashboard::DashboardCards;

/// Aggregate counts for the dashboard cards.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DashboardQuery: Send + Sync {
    /// The four card counts, computed concurrently.
    async fn card_data(&self) -> Result<DashboardCards, Error>;
}
