//! Dashboard - session state and the policy-checked service facade
//!
//! This crate is the boundary between the pure engines and their callers.
//! The facade checks the access policy before invoking gated engines (the
//! engines themselves never re-check) and hands the caller plain data values
//! the presentation layer can render however it likes.

pub mod cli;
pub mod service;
pub mod session;

mod error;

pub use error::ServiceError;
pub use service::{
    ConsistencyBoard, ConsistencyRow, DashboardService, HotBoard, HotRow, Overview,
    PlayerComparison, RankingRow,
};
pub use session::{Session, User};
