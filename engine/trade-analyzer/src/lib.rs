//! Trade Analyzer - fairness scoring for proposed player trades
//!
//! The evaluator is deliberately tier-unaware: whether a caller is allowed to
//! run a trade analysis is decided at the access-policy boundary before this
//! crate is ever invoked.

pub mod evaluator;
pub mod types;

mod error;

pub use error::TradeError;
pub use evaluator::evaluate;
pub use types::{Recommendation, TradeAnalysis, TradeProposal};
