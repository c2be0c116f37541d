//! The fixed sample dataset the dashboard runs against.
//!
//! Figures are per-game season averages with last-5 / last-week / last-month
//! splits. Feed order here is the tie-break order for every ranking.

use crate::types::{
    InjuryStatus, Player, Position, SeasonStats, SplitStats, WaiverCandidate, WindowStats,
};

/// The eight-player sample feed
pub fn sample_players() -> Vec<Player> {
    vec![
        Player {
            id: "1".to_string(),
            name: "A'ja Wilson".to_string(),
            team: "LAS".to_string(),
            position: Position::F,
            stats: SeasonStats {
                points: 27.3,
                rebounds: 11.9,
                assists: 3.5,
                steals: 1.8,
                blocks: 2.3,
                three_pointers: 0.5,
                field_goal_percentage: 51.2,
                games_played: 38,
                fantasy_points: 47.8,
            },
            last_5_games: SplitStats {
                points: 29.2,
                rebounds: 12.4,
                assists: 4.0,
                steals: 2.2,
                blocks: 2.8,
                three_pointers: 0.8,
                fantasy_points: 52.4,
            },
            last_week: WindowStats {
                points: 31.5,
                rebounds: 13.2,
                assists: 4.2,
                steals: 2.5,
                blocks: 3.0,
                three_pointers: 1.0,
                fantasy_points: 56.2,
                games_played: 3,
            },
            last_month: WindowStats {
                points: 28.8,
                rebounds: 12.1,
                assists: 3.8,
                steals: 2.0,
                blocks: 2.5,
                three_pointers: 0.7,
                fantasy_points: 50.1,
                games_played: 12,
            },
            injury_status: InjuryStatus::Healthy,
            trade_value: 95.0,
            consistency: 92.0,
            efficiency: 88.0,
            hot_score: 94.0,
            weekly_trend: 17.6,
            monthly_trend: 4.8,
        },
        Player {
            id: "2".to_string(),
            name: "Breanna Stewart".to_string(),
            team: "NY".to_string(),
            position: Position::F,
            stats: SeasonStats {
                points: 23.0,
                rebounds: 9.5,
                assists: 3.9,
                steals: 1.5,
                blocks: 1.8,
                three_pointers: 2.3,
                field_goal_percentage: 45.8,
                games_played: 40,
                fantasy_points: 42.0,
            },
            last_5_games: SplitStats {
                points: 25.6,
                rebounds: 10.2,
                assists: 4.2,
                steals: 1.8,
                blocks: 2.0,
                three_pointers: 2.8,
                fantasy_points: 46.6,
            },
            last_week: WindowStats {
                points: 26.3,
                rebounds: 10.8,
                assists: 4.5,
                steals: 1.7,
                blocks: 2.2,
                three_pointers: 3.0,
                fantasy_points: 48.5,
                games_played: 3,
            },
            last_month: WindowStats {
                points: 24.2,
                rebounds: 9.8,
                assists: 4.1,
                steals: 1.6,
                blocks: 1.9,
                three_pointers: 2.5,
                fantasy_points: 44.1,
                games_played: 11,
            },
            injury_status: InjuryStatus::Healthy,
            trade_value: 89.0,
            consistency: 85.0,
            efficiency: 82.0,
            hot_score: 87.0,
            weekly_trend: 15.5,
            monthly_trend: 5.0,
        },
        Player {
            id: "3".to_string(),
            name: "Napheesa Collier".to_string(),
            team: "MIN".to_string(),
            position: Position::F,
            stats: SeasonStats {
                points: 21.0,
                rebounds: 9.7,
                assists: 3.4,
                steals: 2.4,
                blocks: 1.3,
                three_pointers: 1.6,
                field_goal_percentage: 48.3,
                games_played: 40,
                fantasy_points: 40.4,
            },
            last_5_games: SplitStats {
                points: 23.4,
                rebounds: 11.0,
                assists: 3.8,
                steals: 2.8,
                blocks: 1.6,
                three_pointers: 2.0,
                fantasy_points: 44.6,
            },
            last_week: WindowStats {
                points: 24.7,
                rebounds: 11.5,
                assists: 4.0,
                steals: 3.0,
                blocks: 1.8,
                three_pointers: 2.2,
                fantasy_points: 47.2,
                games_played: 3,
            },
            last_month: WindowStats {
                points: 22.1,
                rebounds: 10.2,
                assists: 3.6,
                steals: 2.6,
                blocks: 1.4,
                three_pointers: 1.8,
                fantasy_points: 42.0,
                games_played: 12,
            },
            injury_status: InjuryStatus::Healthy,
            trade_value: 86.0,
            consistency: 88.0,
            efficiency: 85.0,
            hot_score: 91.0,
            weekly_trend: 16.8,
            monthly_trend: 4.0,
        },
        Player {
            id: "4".to_string(),
            name: "Sabrina Ionescu".to_string(),
            team: "NY".to_string(),
            position: Position::G,
            stats: SeasonStats {
                points: 18.2,
                rebounds: 4.4,
                assists: 6.2,
                steals: 0.9,
                blocks: 0.3,
                three_pointers: 3.2,
                field_goal_percentage: 44.1,
                games_played: 40,
                fantasy_points: 35.2,
            },
            last_5_games: SplitStats {
                points: 20.8,
                rebounds: 5.0,
                assists: 7.2,
                steals: 1.2,
                blocks: 0.4,
                three_pointers: 3.8,
                fantasy_points: 39.4,
            },
            last_week: WindowStats {
                points: 22.0,
                rebounds: 5.3,
                assists: 7.8,
                steals: 1.3,
                blocks: 0.5,
                three_pointers: 4.2,
                fantasy_points: 42.1,
                games_played: 3,
            },
            last_month: WindowStats {
                points: 19.5,
                rebounds: 4.7,
                assists: 6.8,
                steals: 1.0,
                blocks: 0.4,
                three_pointers: 3.5,
                fantasy_points: 37.9,
                games_played: 11,
            },
            injury_status: InjuryStatus::Healthy,
            trade_value: 82.0,
            consistency: 79.0,
            efficiency: 77.0,
            hot_score: 85.0,
            weekly_trend: 19.6,
            monthly_trend: 7.7,
        },
        Player {
            id: "5".to_string(),
            name: "Alyssa Thomas".to_string(),
            team: "CONN".to_string(),
            position: Position::F,
            stats: SeasonStats {
                points: 13.1,
                rebounds: 8.4,
                assists: 7.9,
                steals: 1.5,
                blocks: 0.9,
                three_pointers: 0.0,
                field_goal_percentage: 52.8,
                games_played: 40,
                fantasy_points: 33.8,
            },
            last_5_games: SplitStats {
                points: 15.2,
                rebounds: 9.6,
                assists: 8.8,
                steals: 1.8,
                blocks: 1.2,
                three_pointers: 0.0,
                fantasy_points: 37.6,
            },
            last_week: WindowStats {
                points: 11.0,
                rebounds: 7.5,
                assists: 6.8,
                steals: 1.2,
                blocks: 0.7,
                three_pointers: 0.0,
                fantasy_points: 28.2,
                games_played: 2,
            },
            last_month: WindowStats {
                points: 12.8,
                rebounds: 8.1,
                assists: 7.5,
                steals: 1.4,
                blocks: 0.8,
                three_pointers: 0.0,
                fantasy_points: 32.6,
                games_played: 10,
            },
            injury_status: InjuryStatus::Questionable,
            trade_value: 78.0,
            consistency: 84.0,
            efficiency: 81.0,
            hot_score: 68.0,
            weekly_trend: -16.6,
            monthly_trend: -3.6,
        },
        Player {
            id: "6".to_string(),
            name: "Caitlin Clark".to_string(),
            team: "IND".to_string(),
            position: Position::G,
            stats: SeasonStats {
                points: 19.2,
                rebounds: 5.7,
                assists: 8.4,
                steals: 1.3,
                blocks: 0.9,
                three_pointers: 3.0,
                field_goal_percentage: 41.7,
                games_played: 40,
                fantasy_points: 40.5,
            },
            last_5_games: SplitStats {
                points: 22.0,
                rebounds: 6.2,
                assists: 9.8,
                steals: 1.6,
                blocks: 1.2,
                three_pointers: 3.6,
                fantasy_points: 45.4,
            },
            last_week: WindowStats {
                points: 25.3,
                rebounds: 6.8,
                assists: 11.2,
                steals: 1.8,
                blocks: 1.5,
                three_pointers: 4.2,
                fantasy_points: 52.8,
                games_played: 3,
            },
            last_month: WindowStats {
                points: 20.8,
                rebounds: 6.0,
                assists: 9.1,
                steals: 1.5,
                blocks: 1.1,
                three_pointers: 3.3,
                fantasy_points: 43.8,
                games_played: 12,
            },
            injury_status: InjuryStatus::Healthy,
            trade_value: 84.0,
            consistency: 76.0,
            efficiency: 73.0,
            hot_score: 92.0,
            weekly_trend: 30.4,
            monthly_trend: 8.1,
        },
        Player {
            id: "7".to_string(),
            name: "DiJonai Carrington".to_string(),
            team: "CONN".to_string(),
            position: Position::G,
            stats: SeasonStats {
                points: 12.8,
                rebounds: 5.1,
                assists: 1.6,
                steals: 1.2,
                blocks: 0.4,
                three_pointers: 1.8,
                field_goal_percentage: 43.2,
                games_played: 38,
                fantasy_points: 24.9,
            },
            last_5_games: SplitStats {
                points: 18.4,
                rebounds: 6.2,
                assists: 2.2,
                steals: 1.8,
                blocks: 0.6,
                three_pointers: 2.8,
                fantasy_points: 33.0,
            },
            last_week: WindowStats {
                points: 21.7,
                rebounds: 7.0,
                assists: 2.7,
                steals: 2.3,
                blocks: 0.8,
                three_pointers: 3.5,
                fantasy_points: 39.0,
                games_played: 3,
            },
            last_month: WindowStats {
                points: 15.2,
                rebounds: 5.8,
                assists: 1.9,
                steals: 1.5,
                blocks: 0.5,
                three_pointers: 2.3,
                fantasy_points: 28.2,
                games_played: 11,
            },
            injury_status: InjuryStatus::Healthy,
            trade_value: 72.0,
            consistency: 71.0,
            efficiency: 68.0,
            hot_score: 89.0,
            weekly_trend: 56.6,
            monthly_trend: 13.3,
        },
        Player {
            id: "8".to_string(),
            name: "Kelsey Mitchell".to_string(),
            team: "IND".to_string(),
            position: Position::G,
            stats: SeasonStats {
                points: 16.2,
                rebounds: 2.8,
                assists: 2.3,
                steals: 0.8,
                blocks: 0.2,
                three_pointers: 2.7,
                field_goal_percentage: 42.1,
                games_played: 39,
                fantasy_points: 26.8,
            },
            last_5_games: SplitStats {
                points: 19.8,
                rebounds: 3.4,
                assists: 2.8,
                steals: 1.2,
                blocks: 0.4,
                three_pointers: 3.6,
                fantasy_points: 32.2,
            },
            last_week: WindowStats {
                points: 22.3,
                rebounds: 3.8,
                assists: 3.2,
                steals: 1.5,
                blocks: 0.5,
                three_pointers: 4.2,
                fantasy_points: 36.5,
                games_played: 3,
            },
            last_month: WindowStats {
                points: 17.9,
                rebounds: 3.1,
                assists: 2.6,
                steals: 1.0,
                blocks: 0.3,
                three_pointers: 3.1,
                fantasy_points: 29.0,
                games_played: 12,
            },
            injury_status: InjuryStatus::Healthy,
            trade_value: 75.0,
            consistency: 73.0,
            efficiency: 70.0,
            hot_score: 83.0,
            weekly_trend: 36.2,
            monthly_trend: 8.2,
        },
    ]
}

/// The fixed waiver wire candidate feed
pub fn sample_waiver_candidates() -> Vec<WaiverCandidate> {
    vec![
        WaiverCandidate {
            id: "7".to_string(),
            name: "DiJonai Carrington".to_string(),
            team: "CONN".to_string(),
            position: Position::G,
            availability: 85.0,
            recent_performance: 88.0,
            priority: 92.0,
            reason:
                "Increased role with Thomas questionable, averaging 15.4 points over last 5 games"
                    .to_string(),
        },
        WaiverCandidate {
            id: "8".to_string(),
            name: "Leonie Fiebich".to_string(),
            team: "NY".to_string(),
            position: Position::F,
            availability: 78.0,
            recent_performance: 82.0,
            priority: 87.0,
            reason: "Consistent starter with strong defensive stats, 2.1 steals per game last week"
                .to_string(),
        },
        WaiverCandidate {
            id: "9".to_string(),
            name: "Kelsey Mitchell".to_string(),
            team: "IND".to_string(),
            position: Position::G,
            availability: 65.0,
            recent_performance: 85.0,
            priority: 83.0,
            reason: "Hot shooting streak, 45% from three over last 7 games with increased usage"
                .to_string(),
        },
    ]
}
