//! Error types for trade evaluation

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TradeError {
    /// Degenerate proposal that cannot be scored: an empty side (the
    /// fairness ratio would divide by zero) or a player on both sides.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
