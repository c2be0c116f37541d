use player_feed::Player;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A proposed trade: players sent out against players coming back.
/// Ephemeral by design - built up interactively and discarded on reset.
#[derive(Debug, Clone, Default)]
pub struct TradeProposal {
    pub give: Vec<Player>,
    pub receive: Vec<Player>,
}

impl TradeProposal {
    pub fn new(give: Vec<Player>, receive: Vec<Player>) -> Self {
        Self { give, receive }
    }
}

/// Verdict on a proposed trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Accept,
    Decline,
    Neutral,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Accept => write!(f, "accept"),
            Recommendation::Decline => write!(f, "decline"),
            Recommendation::Neutral => write!(f, "neutral"),
        }
    }
}

/// Full result of a trade evaluation, plain data for the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeAnalysis {
    /// min(give, receive) / max(give, receive) * 100, rounded; 100 = even
    pub fairness_score: u32,
    pub give_value: f64,
    pub receive_value: f64,
    /// Combined season fantasy points going out (display only)
    pub give_fantasy_points: f64,
    /// Combined season fantasy points coming back (display only)
    pub receive_fantasy_points: f64,
    pub recommendation: Recommendation,
    pub reasoning: &'static str,
}
