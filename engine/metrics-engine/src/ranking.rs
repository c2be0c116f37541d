//! Descending rankings with stable tie-breaking
//!
//! All views rank through this module so tie-breaking behaves the same
//! everywhere: ties keep feed order (the sort is stable), rank numbers are
//! the 1-based position in sorted order.

use crate::error::MetricsError;
use player_feed::Player;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which stat line a per-game metric reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatWindow {
    Season,
    Last5,
}

/// Metric selector for rankings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RankMetric {
    FantasyPoints,
    Points,
    Rebounds,
    Assists,
    Consistency,
    HotScore,
    WeeklyTrend,
    MonthlyTrend,
}

impl RankMetric {
    /// Read the metric value for a player.
    ///
    /// The composite selectors (consistency, hot score, trends) are
    /// season-scoped and ignore the window.
    pub fn value(&self, player: &Player, window: StatWindow) -> f64 {
        match (self, window) {
            (RankMetric::FantasyPoints, StatWindow::Season) => player.stats.fantasy_points,
            (RankMetric::FantasyPoints, StatWindow::Last5) => player.last_5_games.fantasy_points,
            (RankMetric::Points, StatWindow::Season) => player.stats.points,
            (RankMetric::Points, StatWindow::Last5) => player.last_5_games.points,
            (RankMetric::Rebounds, StatWindow::Season) => player.stats.rebounds,
            (RankMetric::Rebounds, StatWindow::Last5) => player.last_5_games.rebounds,
            (RankMetric::Assists, StatWindow::Season) => player.stats.assists,
            (RankMetric::Assists, StatWindow::Last5) => player.last_5_games.assists,
            (RankMetric::Consistency, _) => player.consistency,
            (RankMetric::HotScore, _) => player.hot_score,
            (RankMetric::WeeklyTrend, _) => player.weekly_trend,
            (RankMetric::MonthlyTrend, _) => player.monthly_trend,
        }
    }
}

impl FromStr for RankMetric {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fantasy-points" => Ok(RankMetric::FantasyPoints),
            "points" => Ok(RankMetric::Points),
            "rebounds" => Ok(RankMetric::Rebounds),
            "assists" => Ok(RankMetric::Assists),
            "consistency" => Ok(RankMetric::Consistency),
            "hot-score" => Ok(RankMetric::HotScore),
            "weekly-trend" => Ok(RankMetric::WeeklyTrend),
            "monthly-trend" => Ok(RankMetric::MonthlyTrend),
            other => Err(MetricsError::InvalidInput(format!(
                "unrecognized rank metric '{other}'"
            ))),
        }
    }
}

/// A player with its 1-based rank position
#[derive(Debug, Clone)]
pub struct RankedPlayer<'a> {
    pub rank: usize,
    pub player: &'a Player,
}

/// Sort descending by the selected metric. The sort is stable: players with
/// equal metric values keep their relative feed order.
pub fn rank_by<'a, I>(players: I, metric: RankMetric, window: StatWindow) -> Vec<RankedPlayer<'a>>
where
    I: IntoIterator<Item = &'a Player>,
{
    let mut sorted: Vec<&Player> = players.into_iter().collect();
    sorted.sort_by(|a, b| metric.value(b, window).total_cmp(&metric.value(a, window)));
    sorted
        .into_iter()
        .enumerate()
        .map(|(i, player)| RankedPlayer { rank: i + 1, player })
        .collect()
}

/// Top `limit` players by the selected metric
pub fn top_n<'a, I>(
    players: I,
    metric: RankMetric,
    window: StatWindow,
    limit: usize,
) -> Vec<RankedPlayer<'a>>
where
    I: IntoIterator<Item = &'a Player>,
{
    let mut ranked = rank_by(players, metric, window);
    ranked.truncate(limit);
    ranked
}
