//! Side-by-side player comparison

use player_feed::Player;
use serde::Serialize;

/// Which side of a stat pairing comes out ahead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Edge {
    Better,
    Worse,
    Equal,
}

/// Edges for both sides of a stat pairing
pub fn stat_edges(left: f64, right: f64) -> (Edge, Edge) {
    if left > right {
        (Edge::Better, Edge::Worse)
    } else if right > left {
        (Edge::Worse, Edge::Better)
    } else {
        (Edge::Equal, Edge::Equal)
    }
}

/// One labelled row of a comparison table
#[derive(Debug, Clone, Serialize)]
pub struct StatComparison {
    pub label: &'static str,
    pub left: f64,
    pub right: f64,
    pub left_edge: Edge,
    pub right_edge: Edge,
}

impl StatComparison {
    fn new(label: &'static str, left: f64, right: f64) -> Self {
        let (left_edge, right_edge) = stat_edges(left, right);
        Self { label, left, right, left_edge, right_edge }
    }
}

/// Season-average comparison rows for two players
pub fn compare_season(left: &Player, right: &Player) -> Vec<StatComparison> {
    vec![
        StatComparison::new(
            "Fantasy Points",
            left.stats.fantasy_points,
            right.stats.fantasy_points,
        ),
        StatComparison::new("Points", left.stats.points, right.stats.points),
        StatComparison::new("Rebounds", left.stats.rebounds, right.stats.rebounds),
        StatComparison::new("Assists", left.stats.assists, right.stats.assists),
        StatComparison::new("Steals", left.stats.steals, right.stats.steals),
        StatComparison::new("Blocks", left.stats.blocks, right.stats.blocks),
        StatComparison::new("3-Pointers", left.stats.three_pointers, right.stats.three_pointers),
        StatComparison::new(
            "FG%",
            left.stats.field_goal_percentage,
            right.stats.field_goal_percentage,
        ),
    ]
}

/// Last-5-games comparison rows for two players
pub fn compare_last_5(left: &Player, right: &Player) -> Vec<StatComparison> {
    vec![
        StatComparison::new(
            "Fantasy Points",
            left.last_5_games.fantasy_points,
            right.last_5_games.fantasy_points,
        ),
        StatComparison::new("Points", left.last_5_games.points, right.last_5_games.points),
        StatComparison::new("Rebounds", left.last_5_games.rebounds, right.last_5_games.rebounds),
        StatComparison::new("Assists", left.last_5_games.assists, right.last_5_games.assists),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use player_feed::sample_players;

    #[test]
    fn test_stat_edges() {
        assert_eq!(stat_edges(10.0, 8.0), (Edge::Better, Edge::Worse));
        assert_eq!(stat_edges(8.0, 10.0), (Edge::Worse, Edge::Better));
        assert_eq!(stat_edges(5.0, 5.0), (Edge::Equal, Edge::Equal));
    }

    #[test]
    fn test_compare_season_rows() {
        let players = sample_players();
        let rows = compare_season(&players[0], &players[1]);

        assert_eq!(rows.len(), 8);
        let fp = &rows[0];
        assert_eq!(fp.label, "Fantasy Points");
        assert_eq!(fp.left, 47.8);
        assert_eq!(fp.right, 42.0);
        assert_eq!(fp.left_edge, Edge::Better);

        // Stewart has the three-point edge over Wilson
        let threes = rows.iter().find(|r| r.label == "3-Pointers").unwrap();
        assert_eq!(threes.right_edge, Edge::Better);
    }

    #[test]
    fn test_compare_last_5_rows() {
        let players = sample_players();
        let rows = compare_last_5(&players[0], &players[1]);
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.left != 0.0 || r.right != 0.0));
    }
}
