//! The scoring-rate estimator: distils strength signals into expected goals for each side.

use crate::domain::{RatingPair, ScoringRates};
use crate::form::FormGuide;
use crate::market::Market;

/// Baseline expected goals for the home side in odds-ratio mode. The 1.5/1.0 split
/// encodes the home-advantage prior.
pub const HOME_BASELINE_RATE: f64 = 1.5;
pub const AWAY_BASELINE_RATE: f64 = 1.0;

/// Rating-difference scale of the logistic response, matching the Elo convention.
pub const RATING_SCALE: f64 = 400.0;

/// Asymptotic attack strengths as the rating difference grows without bound.
pub const HOME_ATTACK_CEILING: f64 = 1.4;
pub const AWAY_ATTACK_CEILING: f64 = 1.3;

/// Long-run average total goals per match, split between the sides in rating mode.
pub const AVG_TOTAL_GOALS: f64 = 2.7;

/// Fraction of the deviation from par form allowed to move a rate.
pub const FORM_DAMPING: f64 = 0.3;

/// The signal a scoring-rate estimate is drawn from: either a fitted three-outcome
/// market or a pair of strength ratings. The calibrator is written once against the
/// [`ScoringRates`] this produces, irrespective of the variant.
#[derive(Clone, Debug, PartialEq)]
pub enum StrengthSignal {
    Market(Market),
    Ratings(RatingPair),
}
impl StrengthSignal {
    pub fn scoring_rates(&self) -> ScoringRates {
        match self {
            StrengthSignal::Market(market) => from_market(market),
            StrengthSignal::Ratings(ratings) => from_ratings(ratings),
        }
    }

    /// The fitted market, when this signal carries one.
    pub fn market(&self) -> Option<&Market> {
        match self {
            StrengthSignal::Market(market) => Some(market),
            StrengthSignal::Ratings(_) => None,
        }
    }
}

/// Scales the baseline rates by the ratio of each side's implied win probability to its
/// opponent's, capturing relative market-assessed strength without a goals dataset.
pub fn from_market(market: &Market) -> ScoringRates {
    let [home, _, away] = market.probs;
    ScoringRates {
        home: HOME_BASELINE_RATE * home / away,
        away: AWAY_BASELINE_RATE * away / home,
    }
}

/// Maps the rating difference through a logistic response and splits [`AVG_TOTAL_GOALS`]
/// proportionally to the resulting attack strengths. The logistic keeps rates bounded
/// and monotonic in the difference, so extreme mismatches cannot extrapolate without
/// limit.
pub fn from_ratings(ratings: &RatingPair) -> ScoringRates {
    let diff = ratings.diff();
    let home_attack = HOME_ATTACK_CEILING / (1.0 + f64::exp(-diff / RATING_SCALE));
    let away_attack = AWAY_ATTACK_CEILING / (1.0 + f64::exp(diff / RATING_SCALE));
    let total_attack = home_attack + away_attack;
    ScoringRates {
        home: AVG_TOTAL_GOALS * home_attack / total_attack,
        away: AVG_TOTAL_GOALS * away_attack / total_attack,
    }
}

/// Applies a damped multiplicative form correction to each side's rate. With `damping`
/// at [`FORM_DAMPING`], a team averaging 20% above par moves its rate by only 6%,
/// keeping short-sample noise from dominating the base estimate.
pub fn adjust_for_form(
    rates: ScoringRates,
    guide: &FormGuide,
    home_team: &str,
    away_team: &str,
    damping: f64,
) -> ScoringRates {
    let home_form = guide.multiplier(home_team);
    let away_form = guide.multiplier(away_team);
    ScoringRates {
        home: rates.home * (1.0 + (home_form - 1.0) * damping),
        away: rates.away * (1.0 + (away_form - 1.0) * damping),
    }
}
