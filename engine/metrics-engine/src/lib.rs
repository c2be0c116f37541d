//! Metrics Engine - pure ranking, filtering and classification functions
//!
//! Every operation here is a deterministic, side-effect-free function over a
//! collection of player records: no session state, no tier awareness, no I/O.
//! Access gating is the caller's responsibility (see the access-policy crate);
//! this engine computes for whoever asks.

pub mod comparison;
pub mod consistency;
pub mod filter;
pub mod ranking;
pub mod trend;

mod error;

pub use comparison::{compare_last_5, compare_season, stat_edges, Edge, StatComparison};
pub use consistency::{
    advanced_consistency, consistency_tier, league_average_consistency, variance_proxy,
    AdvancedConsistency, ConsistencyTier,
};
pub use error::MetricsError;
pub use filter::{
    filter_by_min_games, filter_by_position, injury_concerns, GamesWindow, PositionFilter,
};
pub use ranking::{rank_by, top_n, RankMetric, RankedPlayer, StatWindow};
pub use trend::{
    count_trending_above, hot_level, recent_vs_season, HotLevel, RecentForm, RecentVsSeason,
    Timeframe,
};
