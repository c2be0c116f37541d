//! Error types for the dashboard facade

use access_policy::Feature;
use metrics_engine::MetricsError;
use player_feed::FeedError;
use thiserror::Error;
use trade_analyzer::TradeError;

#[derive(Error, Debug)]
pub enum ServiceError {
    /// The session's tier does not unlock the feature. This is the expected
    /// signal for a locked view, not a fault; callers render an upsell state.
    #[error("Access denied: feature '{feature:?}' is not available on this plan")]
    AccessDenied { feature: Feature },

    #[error(transparent)]
    Metrics(#[from] MetricsError),

    #[error(transparent)]
    Trade(#[from] TradeError),

    #[error(transparent)]
    Feed(#[from] FeedError),
}
