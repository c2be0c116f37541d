//! Order-preserving filters over the player feed

use crate::error::MetricsError;
use player_feed::{Player, Position};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Position filter token: everyone, or one position exactly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionFilter {
    All,
    Only(Position),
}

impl FromStr for PositionFilter {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(PositionFilter::All),
            "G" => Ok(PositionFilter::Only(Position::G)),
            "F" => Ok(PositionFilter::Only(Position::F)),
            "C" => Ok(PositionFilter::Only(Position::C)),
            other => Err(MetricsError::InvalidInput(format!(
                "unrecognized position filter '{other}' (expected all, G, F or C)"
            ))),
        }
    }
}

/// Which window a games-played threshold applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamesWindow {
    Season,
    LastWeek,
    LastMonth,
}

impl GamesWindow {
    fn games_played(&self, player: &Player) -> u32 {
        match self {
            GamesWindow::Season => player.stats.games_played,
            GamesWindow::LastWeek => player.last_week.games_played,
            GamesWindow::LastMonth => player.last_month.games_played,
        }
    }
}

/// Keep players matching the position filter, preserving feed order.
///
/// `All` returns the input unchanged; a filter matching nobody yields an
/// empty sequence, never an error.
pub fn filter_by_position<'a, I>(players: I, filter: PositionFilter) -> Vec<&'a Player>
where
    I: IntoIterator<Item = &'a Player>,
{
    players
        .into_iter()
        .filter(|p| match filter {
            PositionFilter::All => true,
            PositionFilter::Only(pos) => p.position == pos,
        })
        .collect()
}

/// Keep players with `games_played >= min_games` in the given window,
/// preserving feed order
pub fn filter_by_min_games<'a, I>(
    players: I,
    window: GamesWindow,
    min_games: u32,
) -> Vec<&'a Player>
where
    I: IntoIterator<Item = &'a Player>,
{
    players.into_iter().filter(|p| window.games_played(p) >= min_games).collect()
}

/// Players whose injury status is anything but healthy, in feed order
pub fn injury_concerns<'a, I>(players: I) -> Vec<&'a Player>
where
    I: IntoIterator<Item = &'a Player>,
{
    players.into_iter().filter(|p| p.injury_status.is_concern()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use player_feed::sample_players;

    #[test]
    fn test_filter_all_is_identity() {
        let players = sample_players();
        let filtered = filter_by_position(&players, PositionFilter::All);

        // Same elements, same order
        assert_eq!(filtered.len(), players.len());
        for (kept, original) in filtered.iter().zip(players.iter()) {
            assert_eq!(kept.id, original.id);
        }
    }

    #[test]
    fn test_filter_by_position_preserves_feed_order() {
        let players = sample_players();
        let guards = filter_by_position(&players, PositionFilter::Only(Position::G));

        let ids: Vec<&str> = guards.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["4", "6", "7", "8"]);
    }

    #[test]
    fn test_filter_with_no_match_is_empty_not_error() {
        let players = sample_players();
        let centers = filter_by_position(&players, PositionFilter::Only(Position::C));
        assert!(centers.is_empty());
    }

    #[test]
    fn test_filter_token_parsing() {
        assert_eq!("all".parse::<PositionFilter>().unwrap(), PositionFilter::All);
        assert_eq!("G".parse::<PositionFilter>().unwrap(), PositionFilter::Only(Position::G));
        assert!(matches!(
            "guards".parse::<PositionFilter>(),
            Err(MetricsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_min_games_per_window() {
        let players = sample_players();

        // Alyssa Thomas played only 2 games last week
        let week = filter_by_min_games(&players, GamesWindow::LastWeek, 3);
        assert!(week.iter().all(|p| p.last_week.games_played >= 3));
        assert!(!week.iter().any(|p| p.name == "Alyssa Thomas"));

        // A'ja Wilson and DiJonai Carrington have 38 season games
        let season = filter_by_min_games(&players, GamesWindow::Season, 39);
        assert!(!season.iter().any(|p| p.stats.games_played < 39));
        assert_eq!(season.len(), 6);
    }

    #[test]
    fn test_filters_compose() {
        let players = sample_players();
        let pool = filter_by_position(&players, PositionFilter::Only(Position::G));
        let pool = filter_by_min_games(pool, GamesWindow::LastMonth, 12);

        let ids: Vec<&str> = pool.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["6", "8"]);
    }

    #[test]
    fn test_injury_concerns() {
        let players = sample_players();
        let concerns = injury_concerns(&players);
        assert_eq!(concerns.len(), 1);
        assert_eq!(concerns[0].name, "Alyssa Thomas");
    }
}
