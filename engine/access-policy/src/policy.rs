use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Subscription tier. Ordering is the containment rule: a higher tier covers
/// every threshold-gated feature of the tiers below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Free,
    Premium,
    Pro,
}

impl Tier {
    /// Parse a tier token, treating anything unrecognized as `Free`.
    /// Least privilege is the default: an unknown token must never unlock
    /// more than a free account would.
    pub fn from_token(token: &str) -> Tier {
        match token {
            "premium" => Tier::Premium,
            "pro" => Tier::Pro,
            _ => Tier::Free,
        }
    }

    /// Marketing display name for the tier
    pub fn display_name(&self) -> &'static str {
        match self {
            Tier::Free => "Scout",
            Tier::Premium => "Analyst",
            Tier::Pro => "Expert",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Free => write!(f, "free"),
            Tier::Premium => write!(f, "premium"),
            Tier::Pro => write!(f, "pro"),
        }
    }
}

/// Every gateable feature of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    Dashboard,
    PlayerComparison,
    /// Viewing the trade analyzer page (building a proposal)
    TradeAnalyzerView,
    Rankings,
    HotPlayers,
    /// Consistency rankings and tiers without the advanced block
    ConsistencyBasic,
    WaiverWire,
    /// Actually computing a trade fairness analysis
    TradeAnalysis,
    /// Variance, floor/ceiling and boom-rate metrics
    AdvancedConsistency,
}

/// What a feature demands of the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessRequirement {
    /// Open to everyone, signed in or not
    Public,
    /// Any signed-in account, tier irrelevant
    Authenticated,
    /// Signed in at the given tier or above
    MinTier(Tier),
    /// Signed in at exactly the given tier; not satisfied by any other
    ExactTier(Tier),
}

impl Feature {
    /// The one place a feature's requirement is defined
    pub fn requirement(&self) -> AccessRequirement {
        match self {
            Feature::Dashboard => AccessRequirement::Authenticated,
            Feature::PlayerComparison
            | Feature::TradeAnalyzerView
            | Feature::Rankings
            | Feature::HotPlayers
            | Feature::ConsistencyBasic => AccessRequirement::Public,
            Feature::WaiverWire => AccessRequirement::ExactTier(Tier::Pro),
            Feature::TradeAnalysis | Feature::AdvancedConsistency => {
                AccessRequirement::MinTier(Tier::Premium)
            }
        }
    }
}

/// Unknown feature token
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown feature: {0}")]
pub struct UnknownFeature(pub String);

impl FromStr for Feature {
    type Err = UnknownFeature;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dashboard" => Ok(Feature::Dashboard),
            "player-comparison" => Ok(Feature::PlayerComparison),
            "trade-analyzer-view" => Ok(Feature::TradeAnalyzerView),
            "rankings" => Ok(Feature::Rankings),
            "hot-players" => Ok(Feature::HotPlayers),
            "consistency" => Ok(Feature::ConsistencyBasic),
            "waiver-wire" => Ok(Feature::WaiverWire),
            "trade-analysis" => Ok(Feature::TradeAnalysis),
            "advanced-consistency" => Ok(Feature::AdvancedConsistency),
            other => Err(UnknownFeature(other.to_string())),
        }
    }
}

/// Decide whether a caller at the given tier (or anonymous) may use a
/// feature. Pure and total: never errors, never panics.
pub fn can_access(feature: Feature, tier: Option<Tier>) -> bool {
    match (feature.requirement(), tier) {
        (AccessRequirement::Public, _) => true,
        (AccessRequirement::Authenticated, Some(_)) => true,
        (AccessRequirement::MinTier(required), Some(actual)) => actual >= required,
        (AccessRequirement::ExactTier(required), Some(actual)) => actual == required,
        (_, None) => false,
    }
}
