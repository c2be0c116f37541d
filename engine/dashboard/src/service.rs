//! The policy-checked service facade
//!
//! One method per dashboard view. Each gated method asks the access policy
//! first and only then invokes the tier-unaware engine underneath. Results
//! are owned snapshots; nothing here keeps references into the feed alive
//! past the call.

use crate::error::ServiceError;
use crate::session::Session;
use access_policy::{can_access, Feature};
use metrics_engine::{
    advanced_consistency, compare_last_5, compare_season, consistency_tier, count_trending_above,
    filter_by_min_games, filter_by_position, injury_concerns, league_average_consistency, rank_by,
    recent_vs_season, top_n, variance_proxy, ConsistencyTier, GamesWindow, HotLevel,
    hot_level, PositionFilter, RankMetric, RecentVsSeason, StatComparison, StatWindow, Timeframe,
};
use player_feed::{Player, PlayerFeed, WaiverCandidate};
use serde::Serialize;
use trade_analyzer::{evaluate, TradeAnalysis, TradeProposal};
use tracing::{debug, info};

/// Signed-in landing view
#[derive(Debug, Clone, Serialize)]
pub struct Overview {
    pub greeting_name: String,
    /// Marketing name of the account's plan
    pub plan: &'static str,
    pub top_scorer: Option<Player>,
    pub hottest_last_5: Option<Player>,
    pub injury_alert_count: usize,
}

/// One row of the rankings table
#[derive(Debug, Clone, Serialize)]
pub struct RankingRow {
    pub rank: usize,
    pub player: Player,
    /// Recomputed last-5-vs-season form indicator
    pub form: RecentVsSeason,
}

/// One row of the hot-players board
#[derive(Debug, Clone, Serialize)]
pub struct HotRow {
    pub rank: usize,
    pub player: Player,
    /// Trend percentage for the requested timeframe
    pub trend: f64,
    pub level: HotLevel,
}

#[derive(Debug, Clone, Serialize)]
pub struct HotBoard {
    pub rows: Vec<HotRow>,
    /// Players improving more than 5% in the timeframe
    pub trending_up: usize,
    /// Players improving more than 15% in the timeframe
    pub breakout_candidates: usize,
}

/// Premium block of the consistency view
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AdvancedMetrics {
    /// Display proxy: complement of the consistency score
    pub variance: f64,
    pub floor: f64,
    pub ceiling: f64,
    pub boom_rate_pct: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConsistencyRow {
    pub rank: usize,
    pub player: Player,
    pub tier: ConsistencyTier,
    /// Present only when the session unlocks advanced consistency metrics
    pub advanced: Option<AdvancedMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConsistencyBoard {
    pub rows: Vec<ConsistencyRow>,
    pub league_average: Option<f64>,
}

/// Side-by-side comparison of two players
#[derive(Debug, Clone, Serialize)]
pub struct PlayerComparison {
    pub left: Player,
    pub right: Player,
    pub season: Vec<StatComparison>,
    pub last_5: Vec<StatComparison>,
}

/// Facade over the engines for a single feed snapshot
#[derive(Debug, Clone)]
pub struct DashboardService {
    feed: PlayerFeed,
    waiver_candidates: Vec<WaiverCandidate>,
}

impl DashboardService {
    pub fn new(feed: PlayerFeed, waiver_candidates: Vec<WaiverCandidate>) -> Self {
        Self { feed, waiver_candidates }
    }

    /// Service over the built-in sample dataset
    pub fn with_sample_data() -> Self {
        Self::new(
            PlayerFeed::from_players(player_feed::sample_players()),
            player_feed::sample_waiver_candidates(),
        )
    }

    pub fn feed(&self) -> &PlayerFeed {
        &self.feed
    }

    /// Landing overview: requires any signed-in account
    pub fn overview(&self, session: &Session) -> Result<Overview, ServiceError> {
        if !can_access(Feature::Dashboard, session.tier()) {
            return Err(ServiceError::AccessDenied { feature: Feature::Dashboard });
        }
        let user = session
            .user()
            .ok_or(ServiceError::AccessDenied { feature: Feature::Dashboard })?;

        let players = self.feed.players();
        let top_scorer = top_n(players, RankMetric::FantasyPoints, StatWindow::Season, 1)
            .first()
            .map(|r| r.player.clone());
        let hottest_last_5 = top_n(players, RankMetric::FantasyPoints, StatWindow::Last5, 1)
            .first()
            .map(|r| r.player.clone());

        Ok(Overview {
            greeting_name: user.display_name.clone(),
            plan: user.tier.display_name(),
            top_scorer,
            hottest_last_5,
            injury_alert_count: injury_concerns(players).len(),
        })
    }

    /// Rankings table: public. Sorted descending by the metric over the
    /// window, with the recomputed form indicator per row.
    pub fn rankings(
        &self,
        metric: RankMetric,
        window: StatWindow,
        position: PositionFilter,
    ) -> Result<Vec<RankingRow>, ServiceError> {
        let pool = filter_by_position(self.feed.players(), position);
        let ranked = rank_by(pool, metric, window);

        let mut rows = Vec::with_capacity(ranked.len());
        for entry in ranked {
            let form = recent_vs_season(entry.player)?;
            rows.push(RankingRow { rank: entry.rank, player: entry.player.clone(), form });
        }
        debug!("Built rankings: {} rows by {:?}", rows.len(), metric);
        Ok(rows)
    }

    /// Hot-players board: public
    pub fn hot_players(
        &self,
        timeframe: Timeframe,
        position: PositionFilter,
        min_games: u32,
    ) -> HotBoard {
        let pool = filter_by_position(self.feed.players(), position);
        let pool = filter_by_min_games(pool, timeframe.games_window(), min_games);

        let metric = match timeframe {
            Timeframe::Week => RankMetric::WeeklyTrend,
            Timeframe::Month => RankMetric::MonthlyTrend,
        };
        let trending_up = count_trending_above(pool.iter().copied(), timeframe, 5.0);
        let breakout_candidates = count_trending_above(pool.iter().copied(), timeframe, 15.0);

        let rows = rank_by(pool, metric, StatWindow::Season)
            .into_iter()
            .map(|entry| {
                let trend = timeframe.trend(entry.player);
                HotRow {
                    rank: entry.rank,
                    player: entry.player.clone(),
                    trend,
                    level: hot_level(trend),
                }
            })
            .collect();

        HotBoard { rows, trending_up, breakout_candidates }
    }

    /// Consistency board: the basic ranking is public, the advanced block is
    /// attached only for sessions that unlock it
    pub fn consistency_board(
        &self,
        session: &Session,
        position: PositionFilter,
        min_games: u32,
    ) -> ConsistencyBoard {
        let include_advanced = can_access(Feature::AdvancedConsistency, session.tier());
        if !include_advanced {
            debug!("Session tier {:?} gets the basic consistency view", session.tier());
        }

        let pool = filter_by_position(self.feed.players(), position);
        let pool = filter_by_min_games(pool, GamesWindow::Season, min_games);
        let league_average = league_average_consistency(pool.iter().copied());

        let rows = rank_by(pool, RankMetric::Consistency, StatWindow::Season)
            .into_iter()
            .map(|entry| {
                let advanced = include_advanced.then(|| {
                    let projections = advanced_consistency(entry.player);
                    AdvancedMetrics {
                        variance: variance_proxy(entry.player.consistency),
                        floor: projections.floor,
                        ceiling: projections.ceiling,
                        boom_rate_pct: projections.boom_rate_pct,
                    }
                });
                ConsistencyRow {
                    rank: entry.rank,
                    player: entry.player.clone(),
                    tier: consistency_tier(entry.player.consistency),
                    advanced,
                }
            })
            .collect();

        ConsistencyBoard { rows, league_average }
    }

    /// Side-by-side comparison: public
    pub fn compare(&self, left_id: &str, right_id: &str) -> Result<PlayerComparison, ServiceError> {
        let left = self.feed.get(left_id)?;
        let right = self.feed.get(right_id)?;

        Ok(PlayerComparison {
            left: left.clone(),
            right: right.clone(),
            season: compare_season(left, right),
            last_5: compare_last_5(left, right),
        })
    }

    /// Trade fairness analysis: premium and pro only. The evaluator itself
    /// never re-checks; the gate lives here.
    pub fn analyze_trade(
        &self,
        session: &Session,
        proposal: &TradeProposal,
    ) -> Result<TradeAnalysis, ServiceError> {
        if !can_access(Feature::TradeAnalysis, session.tier()) {
            return Err(ServiceError::AccessDenied { feature: Feature::TradeAnalysis });
        }

        let analysis = evaluate(proposal)?;
        info!(
            "Trade analyzed: fairness {} -> {}",
            analysis.fairness_score, analysis.recommendation
        );
        Ok(analysis)
    }

    /// Advanced consistency metrics for one player: premium and pro only
    pub fn advanced_consistency(
        &self,
        session: &Session,
        player_id: &str,
    ) -> Result<AdvancedMetrics, ServiceError> {
        if !can_access(Feature::AdvancedConsistency, session.tier()) {
            return Err(ServiceError::AccessDenied { feature: Feature::AdvancedConsistency });
        }

        let player = self.feed.get(player_id)?;
        let projections = advanced_consistency(player);
        Ok(AdvancedMetrics {
            variance: variance_proxy(player.consistency),
            floor: projections.floor,
            ceiling: projections.ceiling,
            boom_rate_pct: projections.boom_rate_pct,
        })
    }

    /// Waiver wire recommendations: pro exactly
    pub fn waiver_wire(&self, session: &Session) -> Result<Vec<WaiverCandidate>, ServiceError> {
        if !can_access(Feature::WaiverWire, session.tier()) {
            return Err(ServiceError::AccessDenied { feature: Feature::WaiverWire });
        }

        let mut candidates = self.waiver_candidates.clone();
        candidates.sort_by(|a, b| b.priority.total_cmp(&a.priority));
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use access_policy::Tier;
    use trade_analyzer::Recommendation;

    fn service() -> DashboardService {
        DashboardService::with_sample_data()
    }

    fn proposal(give_id: &str, receive_id: &str) -> TradeProposal {
        let feed = PlayerFeed::from_players(player_feed::sample_players());
        TradeProposal::new(
            vec![feed.get(give_id).unwrap().clone()],
            vec![feed.get(receive_id).unwrap().clone()],
        )
    }

    #[test]
    fn test_overview_requires_sign_in() {
        let service = service();
        let result = service.overview(&Session::anonymous());
        assert!(matches!(
            result,
            Err(ServiceError::AccessDenied { feature: Feature::Dashboard })
        ));

        let session = Session::signed_in(1, "Casey", Tier::Free);
        let overview = service.overview(&session).unwrap();
        assert_eq!(overview.greeting_name, "Casey");
        assert_eq!(overview.plan, "Scout");
        assert_eq!(overview.top_scorer.unwrap().name, "A'ja Wilson");
        assert_eq!(overview.hottest_last_5.unwrap().name, "A'ja Wilson");
        assert_eq!(overview.injury_alert_count, 1);
    }

    #[test]
    fn test_rankings_are_public_and_sorted() {
        let service = service();
        let rows = service
            .rankings(RankMetric::FantasyPoints, StatWindow::Season, PositionFilter::All)
            .unwrap();

        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].player.name, "A'ja Wilson");
        assert!(rows.iter().all(|r| r.form.delta_pct.is_finite()));
    }

    #[test]
    fn test_hot_board_week() {
        let service = service();
        let board = service.hot_players(Timeframe::Week, PositionFilter::All, 2);

        assert_eq!(board.rows[0].player.name, "DiJonai Carrington");
        assert_eq!(board.rows[0].trend, 56.6);
        assert_eq!(board.rows[0].level, HotLevel::Blazing);
        // Thomas (-16.6%) is the only weekly decliner in the sample feed
        assert_eq!(board.trending_up, 7);
        assert_eq!(board.breakout_candidates, 7);
    }

    #[test]
    fn test_hot_board_respects_min_games() {
        let service = service();
        let board = service.hot_players(Timeframe::Week, PositionFilter::All, 3);
        // Thomas (2 games last week) is excluded
        assert!(board.rows.iter().all(|r| r.player.name != "Alyssa Thomas"));
        assert_eq!(board.rows.len(), 7);
    }

    #[test]
    fn test_consistency_board_gates_advanced_block() {
        let service = service();

        let basic = service.consistency_board(&Session::anonymous(), PositionFilter::All, 20);
        assert!(basic.rows.iter().all(|r| r.advanced.is_none()));
        assert_eq!(basic.rows[0].player.name, "A'ja Wilson");
        assert_eq!(basic.rows[0].tier, ConsistencyTier::Elite);
        assert_eq!(basic.league_average, Some(81.0));

        let premium = Session::signed_in(2, "Alex", Tier::Premium);
        let full = service.consistency_board(&premium, PositionFilter::All, 20);
        let top = full.rows[0].advanced.expect("premium unlocks advanced metrics");
        assert_eq!(top.variance, 8.0); // 100 - 92
        assert_eq!(top.boom_rate_pct, 28);
    }

    #[test]
    fn test_compare_unknown_player_is_feed_error() {
        let service = service();
        assert!(matches!(service.compare("1", "999"), Err(ServiceError::Feed(_))));

        let comparison = service.compare("1", "2").unwrap();
        assert_eq!(comparison.season.len(), 8);
        assert_eq!(comparison.last_5.len(), 4);
    }

    #[test]
    fn test_trade_analysis_gating() {
        let service = service();
        let proposal = proposal("1", "4");

        for session in [Session::anonymous(), Session::signed_in(3, "Sam", Tier::Free)] {
            let result = service.analyze_trade(&session, &proposal);
            assert!(matches!(
                result,
                Err(ServiceError::AccessDenied { feature: Feature::TradeAnalysis })
            ));
        }

        let premium = Session::signed_in(4, "Drew", Tier::Premium);
        let analysis = service.analyze_trade(&premium, &proposal).unwrap();
        assert_eq!(analysis.fairness_score, 86);
        assert_eq!(analysis.recommendation, Recommendation::Accept);

        // Containment: pro unlocks the premium gate too
        let pro = Session::signed_in(5, "Quinn", Tier::Pro);
        assert!(service.analyze_trade(&pro, &proposal).is_ok());
    }

    #[test]
    fn test_invalid_trade_passes_through_as_trade_error() {
        let service = service();
        let premium = Session::signed_in(4, "Drew", Tier::Premium);
        let empty = TradeProposal::default();

        let result = service.analyze_trade(&premium, &empty);
        assert!(matches!(result, Err(ServiceError::Trade(_))));
    }

    #[test]
    fn test_waiver_wire_is_pro_only() {
        let service = service();

        let premium = Session::signed_in(6, "Morgan", Tier::Premium);
        assert!(matches!(
            service.waiver_wire(&premium),
            Err(ServiceError::AccessDenied { feature: Feature::WaiverWire })
        ));

        let pro = Session::signed_in(7, "Jesse", Tier::Pro);
        let candidates = service.waiver_wire(&pro).unwrap();
        assert_eq!(candidates.len(), 3);
        // Highest priority first
        assert_eq!(candidates[0].name, "DiJonai Carrington");
        assert!(candidates[0].priority >= candidates[1].priority);
    }

    #[test]
    fn test_advanced_consistency_endpoint_gating() {
        let service = service();

        let free = Session::signed_in(8, "Taylor", Tier::Free);
        assert!(matches!(
            service.advanced_consistency(&free, "1"),
            Err(ServiceError::AccessDenied { feature: Feature::AdvancedConsistency })
        ));

        let premium = Session::signed_in(9, "Avery", Tier::Premium);
        let metrics = service.advanced_consistency(&premium, "1").unwrap();
        assert!((metrics.floor - 33.46).abs() < 1e-9);
        assert!((metrics.ceiling - 66.92).abs() < 1e-9);
    }
}
