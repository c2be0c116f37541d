//! # Command Line Interface
//!
//! CLI for browsing the analytics views from a terminal.

use crate::service::DashboardService;
use crate::session::Session;
use access_policy::{can_access, Feature, Tier};
use anyhow::Result;
use clap::{Parser, Subcommand};
use metrics_engine::{PositionFilter, RankMetric, StatWindow, Timeframe};
use trade_analyzer::TradeProposal;

/// Dashboard CLI over the built-in sample feed
#[derive(Parser)]
#[command(name = "dashboard-cli")]
#[command(about = "Courtside fantasy analytics from the command line")]
pub struct Cli {
    /// Sign in at this plan tier (free, premium, pro); anonymous when omitted
    #[arg(long)]
    pub tier: Option<String>,

    /// Display name for the signed-in session
    #[arg(long, default_value = "Analyst")]
    pub name: String,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the signed-in overview
    Overview,
    /// Rank players by a metric
    Rankings {
        /// Metric: fantasy-points, points, rebounds, assists, consistency,
        /// hot-score, weekly-trend, monthly-trend
        #[arg(long, default_value = "fantasy-points")]
        metric: String,
        /// Rank over the last 5 games instead of the season
        #[arg(long)]
        last5: bool,
        /// Position filter: all, G, F, C
        #[arg(long, default_value = "all")]
        position: String,
    },
    /// Show the hot players board
    Hot {
        /// Timeframe: week or month
        #[arg(long, default_value = "week")]
        timeframe: String,
        /// Position filter: all, G, F, C
        #[arg(long, default_value = "all")]
        position: String,
        /// Minimum games played in the timeframe
        #[arg(long, default_value = "1")]
        min_games: u32,
    },
    /// Show the consistency board
    Consistency {
        /// Position filter: all, G, F, C
        #[arg(long, default_value = "all")]
        position: String,
        /// Minimum games played this season
        #[arg(long, default_value = "10")]
        min_games: u32,
    },
    /// Compare two players side by side
    Compare {
        /// Feed id of the first player
        left: String,
        /// Feed id of the second player
        right: String,
    },
    /// Evaluate a trade proposal
    Trade {
        /// Feed ids of the players you give away
        #[arg(long, value_delimiter = ',', required = true)]
        give: Vec<String>,
        /// Feed ids of the players you receive
        #[arg(long, value_delimiter = ',', required = true)]
        receive: Vec<String>,
    },
    /// Show waiver wire recommendations
    Waiver,
    /// Check whether the current session may use a feature
    Access {
        /// Feature token, e.g. waiver-wire, trade-analysis, rankings
        feature: String,
    },
}

/// CLI handler
pub struct CliHandler {
    service: DashboardService,
    session: Session,
}

impl CliHandler {
    /// Handler over the sample feed with a session built from the CLI args
    pub fn new(tier: Option<&str>, name: &str) -> Self {
        let session = match tier {
            Some(token) => Session::signed_in(1, name, Tier::from_token(token)),
            None => Session::anonymous(),
        };
        Self { service: DashboardService::with_sample_data(), session }
    }

    /// Handle CLI commands
    pub fn handle_command(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Overview => {
                self.show_overview()?;
            }
            Commands::Rankings { metric, last5, position } => {
                self.show_rankings(&metric, last5, &position)?;
            }
            Commands::Hot { timeframe, position, min_games } => {
                self.show_hot(&timeframe, &position, min_games)?;
            }
            Commands::Consistency { position, min_games } => {
                self.show_consistency(&position, min_games)?;
            }
            Commands::Compare { left, right } => {
                self.show_comparison(&left, &right)?;
            }
            Commands::Trade { give, receive } => {
                self.show_trade(&give, &receive)?;
            }
            Commands::Waiver => {
                self.show_waiver()?;
            }
            Commands::Access { feature } => {
                self.show_access(&feature)?;
            }
        }
        Ok(())
    }

    fn show_overview(&self) -> Result<()> {
        let overview = self.service.overview(&self.session)?;

        println!("🏀 Welcome back, {} ({} plan)", overview.greeting_name, overview.plan);
        println!("{}", "=".repeat(50));
        if let Some(top) = &overview.top_scorer {
            println!("Top scorer:       {} ({:.1} FP/game)", top.name, top.stats.fantasy_points);
        }
        if let Some(hot) = &overview.hottest_last_5 {
            println!(
                "Hottest (last 5): {} ({:.1} FP/game)",
                hot.name, hot.last_5_games.fantasy_points
            );
        }
        println!("Injury alerts:    {}", overview.injury_alert_count);

        Ok(())
    }

    fn show_rankings(&self, metric: &str, last5: bool, position: &str) -> Result<()> {
        let metric: RankMetric = metric.parse()?;
        let position: PositionFilter = position.parse()?;
        let window = if last5 { StatWindow::Last5 } else { StatWindow::Season };

        let rows = self.service.rankings(metric, window, position)?;

        println!("📊 Player Rankings ({:?})", metric);
        println!("{}", "=".repeat(50));
        for row in rows {
            println!(
                "{:>2}. {:<22} {:<4} {:>7.1}%  {}",
                row.rank,
                row.player.name,
                row.player.team,
                row.form.delta_pct,
                row.form.form
            );
        }

        Ok(())
    }

    fn show_hot(&self, timeframe: &str, position: &str, min_games: u32) -> Result<()> {
        let timeframe: Timeframe = timeframe.parse()?;
        let position: PositionFilter = position.parse()?;

        let board = self.service.hot_players(timeframe, position, min_games);

        println!("🔥 Hot Players ({:?})", timeframe);
        println!("{}", "=".repeat(50));
        for row in &board.rows {
            println!(
                "{:>2}. {:<22} {:>+7.1}%  {}",
                row.rank, row.player.name, row.trend, row.level
            );
        }
        println!();
        println!("Trending up (>5%):  {}", board.trending_up);
        println!("Breakouts (>15%):   {}", board.breakout_candidates);

        Ok(())
    }

    fn show_consistency(&self, position: &str, min_games: u32) -> Result<()> {
        let position: PositionFilter = position.parse()?;

        let board = self.service.consistency_board(&self.session, position, min_games);

        println!("🎯 Consistency Board");
        println!("{}", "=".repeat(50));
        for row in &board.rows {
            print!(
                "{:>2}. {:<22} {:>5.1}  {:<9}",
                row.rank,
                row.player.name,
                row.player.consistency,
                row.tier.to_string()
            );
            match &row.advanced {
                Some(advanced) => println!(
                    "  floor {:.1} / ceiling {:.1} / boom {}%",
                    advanced.floor, advanced.ceiling, advanced.boom_rate_pct
                ),
                None => println!(),
            }
        }
        if let Some(average) = board.league_average {
            println!();
            println!("League average consistency: {:.0}", average);
        }

        Ok(())
    }

    fn show_comparison(&self, left: &str, right: &str) -> Result<()> {
        let comparison = self.service.compare(left, right)?;

        println!("⚖️  {} vs {}", comparison.left.name, comparison.right.name);
        println!("{}", "=".repeat(50));
        println!("Season averages:");
        for row in &comparison.season {
            println!("  {:<16} {:>6.1}  |  {:<6.1}", row.label, row.left, row.right);
        }
        println!("Last 5 games:");
        for row in &comparison.last_5 {
            println!("  {:<16} {:>6.1}  |  {:<6.1}", row.label, row.left, row.right);
        }

        Ok(())
    }

    fn show_trade(&self, give_ids: &[String], receive_ids: &[String]) -> Result<()> {
        let feed = self.service.feed();
        let mut give = Vec::with_capacity(give_ids.len());
        for id in give_ids {
            give.push(feed.get(id)?.clone());
        }
        let mut receive = Vec::with_capacity(receive_ids.len());
        for id in receive_ids {
            receive.push(feed.get(id)?.clone());
        }

        let proposal = TradeProposal::new(give, receive);
        let analysis = self.service.analyze_trade(&self.session, &proposal)?;

        println!("🤝 Trade Analysis");
        println!("{}", "=".repeat(50));
        println!("Fairness score:  {}/100", analysis.fairness_score);
        println!(
            "You give:        value {:.1}, {:.1} FP/game",
            analysis.give_value, analysis.give_fantasy_points
        );
        println!(
            "You receive:     value {:.1}, {:.1} FP/game",
            analysis.receive_value, analysis.receive_fantasy_points
        );
        println!("Recommendation:  {}", analysis.recommendation);
        println!("Reasoning:       {}", analysis.reasoning);

        Ok(())
    }

    fn show_waiver(&self) -> Result<()> {
        let candidates = self.service.waiver_wire(&self.session)?;

        println!("📋 Waiver Wire Recommendations");
        println!("{}", "=".repeat(50));
        for candidate in candidates {
            println!(
                "{:<22} {:<4} priority {:>4.0}  available {:>3.0}%",
                candidate.name, candidate.team, candidate.priority, candidate.availability
            );
            println!("    {}", candidate.reason);
        }

        Ok(())
    }

    fn show_access(&self, feature: &str) -> Result<()> {
        let feature: Feature = feature.parse()?;
        let allowed = can_access(feature, self.session.tier());

        let tier = match self.session.tier() {
            Some(tier) => tier.display_name(),
            None => "anonymous",
        };
        if allowed {
            println!("✅ {:?} is available to this session ({})", feature, tier);
        } else {
            println!("🔒 {:?} is locked for this session ({})", feature, tier);
        }

        Ok(())
    }
}
