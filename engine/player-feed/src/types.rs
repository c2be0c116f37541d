use serde::{Deserialize, Serialize};
use std::fmt;

/// On-court position of a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    G,
    F,
    C,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::G => write!(f, "G"),
            Position::F => write!(f, "F"),
            Position::C => write!(f, "C"),
        }
    }
}

/// Injury designation as reported by the feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InjuryStatus {
    Healthy,
    Questionable,
    DayToDay,
    Out,
}

impl InjuryStatus {
    /// Whether the player is a lineup concern (anything but healthy)
    pub fn is_concern(&self) -> bool {
        !matches!(self, InjuryStatus::Healthy)
    }
}

impl fmt::Display for InjuryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InjuryStatus::Healthy => write!(f, "healthy"),
            InjuryStatus::Questionable => write!(f, "questionable"),
            InjuryStatus::DayToDay => write!(f, "day-to-day"),
            InjuryStatus::Out => write!(f, "out"),
        }
    }
}

/// Full-season per-game averages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonStats {
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
    pub three_pointers: f64,
    /// Field goal percentage in [0, 100]
    pub field_goal_percentage: f64,
    pub games_played: u32,
    pub fantasy_points: f64,
}

/// Last-5-games averages (the feed carries no games-played count or FG% here)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitStats {
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
    pub three_pointers: f64,
    pub fantasy_points: f64,
}

/// Rolling-window averages (last week / last month) with a games count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowStats {
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
    pub three_pointers: f64,
    pub fantasy_points: f64,
    pub games_played: u32,
}

/// A player record as supplied by the feed.
///
/// The composite scores (`trade_value`, `consistency`, `efficiency`,
/// `hot_score`) and the signed trend percentages are precomputed upstream and
/// treated as trusted input; the engines never re-derive them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    /// Team abbreviation (e.g. "LAS", "NY")
    pub team: String,
    pub position: Position,
    pub stats: SeasonStats,
    #[serde(rename = "last5Games")]
    pub last_5_games: SplitStats,
    pub last_week: WindowStats,
    pub last_month: WindowStats,
    pub injury_status: InjuryStatus,
    /// Relative market worth, 0-100
    pub trade_value: f64,
    /// Higher means lower game-to-game variance, 0-100
    pub consistency: f64,
    /// Efficiency rating, 0-100
    pub efficiency: f64,
    /// Recent-surge composite, 0-100
    pub hot_score: f64,
    /// Last-week fantasy production vs season average, signed percent
    pub weekly_trend: f64,
    /// Last-month fantasy production vs season average, signed percent
    pub monthly_trend: f64,
}

/// A waiver wire pickup candidate from the separate waiver feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaiverCandidate {
    pub id: String,
    pub name: String,
    pub team: String,
    pub position: Position,
    /// League-wide availability, 0-100
    pub availability: f64,
    /// Recent performance composite, 0-100
    pub recent_performance: f64,
    /// Precomputed pickup priority, 0-100
    pub priority: f64,
    /// Free-text rationale for the recommendation
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_injury_status_wire_tokens() {
        let json = serde_json::to_string(&InjuryStatus::DayToDay).unwrap();
        assert_eq!(json, "\"day-to-day\"");

        let status: InjuryStatus = serde_json::from_str("\"questionable\"").unwrap();
        assert_eq!(status, InjuryStatus::Questionable);
    }

    #[test]
    fn test_injury_concern() {
        assert!(!InjuryStatus::Healthy.is_concern());
        assert!(InjuryStatus::Questionable.is_concern());
        assert!(InjuryStatus::DayToDay.is_concern());
        assert!(InjuryStatus::Out.is_concern());
    }

    #[test]
    fn test_player_round_trips_feed_json() {
        let json = r#"{
            "id": "1",
            "name": "A'ja Wilson",
            "team": "LAS",
            "position": "F",
            "stats": {
                "points": 27.3, "rebounds": 11.9, "assists": 3.5,
                "steals": 1.8, "blocks": 2.3, "threePointers": 0.5,
                "fieldGoalPercentage": 51.2, "gamesPlayed": 38, "fantasyPoints": 47.8
            },
            "last5Games": {
                "points": 29.2, "rebounds": 12.4, "assists": 4.0,
                "steals": 2.2, "blocks": 2.8, "threePointers": 0.8, "fantasyPoints": 52.4
            },
            "lastWeek": {
                "points": 31.5, "rebounds": 13.2, "assists": 4.2,
                "steals": 2.5, "blocks": 3.0, "threePointers": 1.0,
                "fantasyPoints": 56.2, "gamesPlayed": 3
            },
            "lastMonth": {
                "points": 28.8, "rebounds": 12.1, "assists": 3.8,
                "steals": 2.0, "blocks": 2.5, "threePointers": 0.7,
                "fantasyPoints": 50.1, "gamesPlayed": 12
            },
            "injuryStatus": "healthy",
            "tradeValue": 95,
            "consistency": 92,
            "efficiency": 88,
            "hotScore": 94,
            "weeklyTrend": 17.6,
            "monthlyTrend": 4.8
        }"#;

        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(player.name, "A'ja Wilson");
        assert_eq!(player.position, Position::F);
        assert_eq!(player.stats.games_played, 38);
        assert_eq!(player.last_week.games_played, 3);
        assert_eq!(player.trade_value, 95.0);
    }
}
