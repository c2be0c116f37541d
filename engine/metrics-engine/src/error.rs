//! Error types for the metrics engine

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetricsError {
    /// Degenerate input that cannot be processed deterministically.
    /// Never silently coerced to NaN, infinity or zero.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
