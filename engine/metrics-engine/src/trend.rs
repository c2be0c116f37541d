//! Trend classification
//!
//! Two independent trend metrics live here and are deliberately not unified:
//! the five-level hot classification reads the feed's precomputed weekly or
//! monthly trend percentage, while the three-level recent-form indicator is
//! recomputed from last-5 fantasy points against the season average.

use crate::error::MetricsError;
use crate::filter::GamesWindow;
use player_feed::{Player, WindowStats};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Timeframe for the hot-players view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Week,
    Month,
}

impl Timeframe {
    /// The feed's precomputed trend percentage for this timeframe
    pub fn trend(&self, player: &Player) -> f64 {
        match self {
            Timeframe::Week => player.weekly_trend,
            Timeframe::Month => player.monthly_trend,
        }
    }

    /// The stat window matching this timeframe
    pub fn window_stats<'a>(&self, player: &'a Player) -> &'a WindowStats {
        match self {
            Timeframe::Week => &player.last_week,
            Timeframe::Month => &player.last_month,
        }
    }

    /// The games window a min-games threshold applies to for this timeframe
    pub fn games_window(&self) -> GamesWindow {
        match self {
            Timeframe::Week => GamesWindow::LastWeek,
            Timeframe::Month => GamesWindow::LastMonth,
        }
    }
}

impl FromStr for Timeframe {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(Timeframe::Week),
            "month" => Ok(Timeframe::Month),
            other => {
                Err(MetricsError::InvalidInput(format!("unrecognized timeframe '{other}'")))
            }
        }
    }
}

/// Five-level hotness classification of a trend percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HotLevel {
    Blazing,
    Hot,
    Warm,
    Steady,
    Cold,
}

impl fmt::Display for HotLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HotLevel::Blazing => write!(f, "blazing"),
            HotLevel::Hot => write!(f, "hot"),
            HotLevel::Warm => write!(f, "warm"),
            HotLevel::Steady => write!(f, "steady"),
            HotLevel::Cold => write!(f, "cold"),
        }
    }
}

/// Classify a signed trend percentage.
///
/// Bands are closed at the lower bound and open at the upper, except the top
/// band which is unbounded above.
pub fn hot_level(trend: f64) -> HotLevel {
    if trend >= 20.0 {
        HotLevel::Blazing
    } else if trend >= 10.0 {
        HotLevel::Hot
    } else if trend >= 5.0 {
        HotLevel::Warm
    } else if trend >= 0.0 {
        HotLevel::Steady
    } else {
        HotLevel::Cold
    }
}

/// Three-level form label for the rankings view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecentForm {
    Hot,
    Steady,
    Cold,
}

impl fmt::Display for RecentForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecentForm::Hot => write!(f, "Hot"),
            RecentForm::Steady => write!(f, "Steady"),
            RecentForm::Cold => write!(f, "Cold"),
        }
    }
}

/// Recent-form indicator: last-5 fantasy production against season average
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecentVsSeason {
    /// Signed percentage delta of last-5 FP vs season FP
    pub delta_pct: f64,
    pub form: RecentForm,
}

/// Compare last-5-games fantasy points to the season average.
///
/// A zero season average makes the ratio undefined; that is rejected as
/// invalid input rather than producing NaN or infinity.
pub fn recent_vs_season(player: &Player) -> Result<RecentVsSeason, MetricsError> {
    let season_avg = player.stats.fantasy_points;
    if season_avg == 0.0 {
        return Err(MetricsError::InvalidInput(format!(
            "player '{}' has a zero season fantasy-point average",
            player.id
        )));
    }

    let recent_avg = player.last_5_games.fantasy_points;
    let delta_pct = (recent_avg - season_avg) / season_avg * 100.0;

    let form = if delta_pct > 5.0 {
        RecentForm::Hot
    } else if delta_pct < -5.0 {
        RecentForm::Cold
    } else {
        RecentForm::Steady
    };

    Ok(RecentVsSeason { delta_pct, form })
}

/// Count players whose trend for the timeframe exceeds `threshold` percent
pub fn count_trending_above<'a, I>(players: I, timeframe: Timeframe, threshold: f64) -> usize
where
    I: IntoIterator<Item = &'a Player>,
{
    players.into_iter().filter(|p| timeframe.trend(p) > threshold).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use player_feed::sample_players;

    #[test]
    fn test_hot_level_threshold_boundaries() {
        assert_eq!(hot_level(20.0), HotLevel::Blazing);
        assert_eq!(hot_level(19.999), HotLevel::Hot);
        assert_eq!(hot_level(10.0), HotLevel::Hot);
        assert_eq!(hot_level(9.999), HotLevel::Warm);
        assert_eq!(hot_level(5.0), HotLevel::Warm);
        assert_eq!(hot_level(4.999), HotLevel::Steady);
        assert_eq!(hot_level(0.0), HotLevel::Steady);
        assert_eq!(hot_level(-0.001), HotLevel::Cold);
    }

    #[test]
    fn test_hot_level_on_sample_trends() {
        let players = sample_players();
        let carrington = players.iter().find(|p| p.id == "7").unwrap();
        let thomas = players.iter().find(|p| p.id == "5").unwrap();

        assert_eq!(hot_level(Timeframe::Week.trend(carrington)), HotLevel::Blazing);
        assert_eq!(hot_level(Timeframe::Month.trend(carrington)), HotLevel::Hot);
        assert_eq!(hot_level(Timeframe::Week.trend(thomas)), HotLevel::Cold);
    }

    #[test]
    fn test_recent_vs_season_labels() {
        let players = sample_players();

        // A'ja Wilson: (52.4 - 47.8) / 47.8 * 100 ~ +9.6% -> Hot
        let wilson = recent_vs_season(&players[0]).unwrap();
        assert_eq!(wilson.form, RecentForm::Hot);
        assert!((wilson.delta_pct - 9.623).abs() < 0.01);

        // A recomputed delta inside [-5, 5] stays Steady
        let mut steady = players[0].clone();
        steady.last_5_games.fantasy_points = steady.stats.fantasy_points * 1.03;
        assert_eq!(recent_vs_season(&steady).unwrap().form, RecentForm::Steady);

        let mut cold = players[0].clone();
        cold.last_5_games.fantasy_points = cold.stats.fantasy_points * 0.9;
        assert_eq!(recent_vs_season(&cold).unwrap().form, RecentForm::Cold);
    }

    #[test]
    fn test_recent_vs_season_rejects_zero_season_average() {
        let mut player = sample_players().remove(0);
        player.stats.fantasy_points = 0.0;

        let result = recent_vs_season(&player);
        assert!(matches!(result, Err(MetricsError::InvalidInput(_))));
    }

    #[test]
    fn test_count_trending_above() {
        let players = sample_players();
        // Weekly trends above 15%: Wilson 17.6, Stewart 15.5, Collier 16.8,
        // Ionescu 19.6, Clark 30.4, Carrington 56.6, Mitchell 36.2
        assert_eq!(count_trending_above(&players, Timeframe::Week, 15.0), 7);
        assert_eq!(count_trending_above(&players, Timeframe::Month, 5.0), 4);
    }

    #[test]
    fn test_timeframe_token_parsing() {
        assert_eq!("week".parse::<Timeframe>().unwrap(), Timeframe::Week);
        assert!(matches!("season".parse::<Timeframe>(), Err(MetricsError::InvalidInput(_))));
    }
}
