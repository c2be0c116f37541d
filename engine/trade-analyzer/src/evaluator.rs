//! Fairness scoring and recommendation policy

use crate::error::TradeError;
use crate::types::{Recommendation, TradeAnalysis, TradeProposal};
use player_feed::Player;

/// How lopsided the raw values may be before the verdict stops being neutral
const VALUE_SKEW_FACTOR: f64 = 1.15;

/// Fairness score at or above which a trade is accepted outright
const BALANCED_SCORE: u32 = 85;

/// Score a trade proposal.
///
/// Both sides must be non-empty and disjoint, and at least one side must carry
/// nonzero total value (the fairness ratio is undefined otherwise).
/// The recommendation rules are evaluated in order;
/// the balanced-score rule short-circuits the value-skew rules.
pub fn evaluate(proposal: &TradeProposal) -> Result<TradeAnalysis, TradeError> {
    if proposal.give.is_empty() {
        return Err(TradeError::InvalidInput("give side of the trade is empty".to_string()));
    }
    if proposal.receive.is_empty() {
        return Err(TradeError::InvalidInput("receive side of the trade is empty".to_string()));
    }
    if let Some(shared) = first_shared_player(&proposal.give, &proposal.receive) {
        return Err(TradeError::InvalidInput(format!(
            "player '{}' appears on both sides of the trade",
            shared.id
        )));
    }

    let give_value: f64 = proposal.give.iter().map(|p| p.trade_value).sum();
    let receive_value: f64 = proposal.receive.iter().map(|p| p.trade_value).sum();

    // Both sides at zero value would make the fairness ratio 0/0
    if give_value.max(receive_value) == 0.0 {
        return Err(TradeError::InvalidInput(
            "both sides of the trade have zero total value".to_string(),
        ));
    }

    let fairness_score =
        (give_value.min(receive_value) / give_value.max(receive_value) * 100.0).round() as u32;

    let (recommendation, reasoning) = if fairness_score >= BALANCED_SCORE {
        (Recommendation::Accept, "Fair trade with balanced value exchange")
    } else if receive_value > give_value * VALUE_SKEW_FACTOR {
        (Recommendation::Accept, "Great value - you're receiving more than you're giving up")
    } else if give_value > receive_value * VALUE_SKEW_FACTOR {
        (Recommendation::Decline, "Poor value - you're giving up too much")
    } else {
        (Recommendation::Neutral, "Moderate trade - consider team needs and matchups")
    };

    Ok(TradeAnalysis {
        fairness_score,
        give_value,
        receive_value,
        give_fantasy_points: proposal.give.iter().map(|p| p.stats.fantasy_points).sum(),
        receive_fantasy_points: proposal.receive.iter().map(|p| p.stats.fantasy_points).sum(),
        recommendation,
        reasoning,
    })
}

fn first_shared_player<'a>(give: &'a [Player], receive: &[Player]) -> Option<&'a Player> {
    give.iter().find(|g| receive.iter().any(|r| r.id == g.id))
}
