//! Player Feed - static in-memory player data for Courtside
//!
//! This crate is the data boundary of the analytics core: it defines the
//! player and waiver-candidate value types, holds the fixed feed the engines
//! compute over, and provides lookup/search over feed records. All records
//! are immutable snapshots; nothing downstream mutates them.

pub mod data;
pub mod feed;
pub mod types;

mod error;

pub use data::{sample_players, sample_waiver_candidates};
pub use error::FeedError;
pub use feed::PlayerFeed;
pub use types::{
    InjuryStatus, Player, Position, SeasonStats, SplitStats, WaiverCandidate, WindowStats,
};
