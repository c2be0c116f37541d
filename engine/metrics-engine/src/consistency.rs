//! Consistency tiers and derived reliability metrics

use player_feed::Player;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reliability tier for a 0-100 consistency score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsistencyTier {
    Elite,
    Excellent,
    Good,
    Average,
    Volatile,
}

impl ConsistencyTier {
    /// One-line description shown next to the tier
    pub fn description(&self) -> &'static str {
        match self {
            ConsistencyTier::Elite => "Rock solid every game",
            ConsistencyTier::Excellent => "Very reliable performer",
            ConsistencyTier::Good => "Generally dependable",
            ConsistencyTier::Average => "Some ups and downs",
            ConsistencyTier::Volatile => "Unpredictable performance",
        }
    }
}

impl fmt::Display for ConsistencyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsistencyTier::Elite => write!(f, "Elite"),
            ConsistencyTier::Excellent => write!(f, "Excellent"),
            ConsistencyTier::Good => write!(f, "Good"),
            ConsistencyTier::Average => write!(f, "Average"),
            ConsistencyTier::Volatile => write!(f, "Volatile"),
        }
    }
}

/// Map a consistency score to its tier. Bounds are closed below.
pub fn consistency_tier(score: f64) -> ConsistencyTier {
    if score >= 90.0 {
        ConsistencyTier::Elite
    } else if score >= 80.0 {
        ConsistencyTier::Excellent
    } else if score >= 70.0 {
        ConsistencyTier::Good
    } else if score >= 60.0 {
        ConsistencyTier::Average
    } else {
        ConsistencyTier::Volatile
    }
}

/// Display proxy for game-to-game variance: the complement of the consistency
/// score. This is not a statistical variance - the data model carries no
/// per-game samples to compute one from.
pub fn variance_proxy(consistency: f64) -> f64 {
    100.0 - consistency
}

/// Premium-gated reliability projections derived from season production.
/// Gating happens at the policy boundary; this computation is tier-unaware.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdvancedConsistency {
    /// Projected low-end fantasy output (70% of season average)
    pub floor: f64,
    /// Projected high-end fantasy output (140% of season average)
    pub ceiling: f64,
    /// Share of games projected to beat the season average, percent
    pub boom_rate_pct: u32,
}

pub fn advanced_consistency(player: &Player) -> AdvancedConsistency {
    AdvancedConsistency {
        floor: player.stats.fantasy_points * 0.7,
        ceiling: player.stats.fantasy_points * 1.4,
        boom_rate_pct: (player.consistency * 0.3).round() as u32,
    }
}

/// Rounded mean consistency across a collection, `None` when empty
pub fn league_average_consistency<'a, I>(players: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a Player>,
{
    let mut sum = 0.0;
    let mut count = 0usize;
    for player in players {
        sum += player.consistency;
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some((sum / count as f64).round())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use player_feed::sample_players;

    #[test]
    fn test_tier_threshold_boundaries() {
        assert_eq!(consistency_tier(90.0), ConsistencyTier::Elite);
        assert_eq!(consistency_tier(89.0), ConsistencyTier::Excellent);
        assert_eq!(consistency_tier(80.0), ConsistencyTier::Excellent);
        assert_eq!(consistency_tier(79.999), ConsistencyTier::Good);
        assert_eq!(consistency_tier(70.0), ConsistencyTier::Good);
        assert_eq!(consistency_tier(60.0), ConsistencyTier::Average);
        assert_eq!(consistency_tier(59.999), ConsistencyTier::Volatile);
        assert_eq!(consistency_tier(0.0), ConsistencyTier::Volatile);
    }

    #[test]
    fn test_variance_proxy_is_display_complement() {
        // The proxy is 100 - consistency by definition: a documented
        // simplification, not a variance computed from game samples.
        assert_eq!(variance_proxy(92.0), 8.0);
        assert_eq!(variance_proxy(71.0), 29.0);
        assert_eq!(variance_proxy(0.0), 100.0);
    }

    #[test]
    fn test_advanced_consistency_projections() {
        let players = sample_players();
        let wilson = &players[0]; // 47.8 season FP, 92 consistency

        let advanced = advanced_consistency(wilson);
        assert!((advanced.floor - 33.46).abs() < 1e-9);
        assert!((advanced.ceiling - 66.92).abs() < 1e-9);
        assert_eq!(advanced.boom_rate_pct, 28); // round(92 * 0.3)
    }

    #[test]
    fn test_league_average() {
        let players = sample_players();
        // (92 + 85 + 88 + 79 + 84 + 76 + 71 + 73) / 8 = 81
        assert_eq!(league_average_consistency(&players), Some(81.0));

        let empty: Vec<Player> = Vec::new();
        assert_eq!(league_average_consistency(&empty), None);
    }
}
