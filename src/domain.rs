//! Value objects shared between the estimator and the calibrator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, EnumIter};

use crate::market::OddsTriple;
use crate::probs::SliceExt;

/// The called result of a match.
#[derive(
    Clone, Copy, Debug, Display, EnumCount, EnumIter, Hash, PartialEq, Eq, Serialize, Deserialize,
)]
pub enum Winner {
    Home,
    Draw,
    Away,
}

/// Strength ratings for the two sides on a common (Elo-style) scale.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RatingPair {
    pub home: f64,
    pub away: f64,
}
impl RatingPair {
    pub fn new(home: f64, away: f64) -> Self {
        Self { home, away }
    }

    pub fn diff(&self) -> f64 {
        self.home - self.away
    }
}

/// Expected goal counts for the two sides over the full match.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoringRates {
    pub home: f64,
    pub away: f64,
}
impl ScoringRates {
    /// Below this, a rate contributes a near-point mass at zero goals.
    pub const DEGENERATE_EPSILON: f64 = 1e-6;

    pub fn new(home: f64, away: f64) -> Self {
        Self { home, away }
    }

    /// Whether either rate has collapsed to (effectively) zero. The scoreline grid
    /// remains well-defined, but the caller may want to flag the forecast.
    pub fn is_degenerate(&self) -> bool {
        self.home < Self::DEGENERATE_EPSILON || self.away < Self::DEGENERATE_EPSILON
    }
}

/// Probabilities of the three match outcomes, ordered home, draw, away.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutcomeProbs {
    pub home: f64,
    pub draw: f64,
    pub away: f64,
}
impl OutcomeProbs {
    pub fn as_array(&self) -> [f64; 3] {
        [self.home, self.draw, self.away]
    }

    pub fn sum(&self) -> f64 {
        self.home + self.draw + self.away
    }

    /// Rescales the three probabilities to sum to exactly 1.
    pub fn normalise(&mut self) {
        let mut probs = self.as_array();
        probs.normalise(1.0);
        [self.home, self.draw, self.away] = probs;
    }

    /// The outcome carrying the greatest probability. Ties resolve to the first
    /// maximum in home, draw, away order.
    pub fn winner(&self) -> Winner {
        let mut winner = Winner::Home;
        let mut highest = self.home;
        if self.draw > highest {
            winner = Winner::Draw;
            highest = self.draw;
        }
        if self.away > highest {
            winner = Winner::Away;
        }
        winner
    }
}

impl From<[f64; 3]> for OutcomeProbs {
    fn from(probs: [f64; 3]) -> Self {
        let [home, draw, away] = probs;
        Self { home, draw, away }
    }
}

/// The complete forecast for one match; the only artifact handed to callers.
///
/// Probabilities and rates are carried unrounded; rounding to two decimal places is left
/// to the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub home_team: String,
    pub away_team: String,
    pub winner: Winner,
    pub probs: OutcomeProbs,
    pub expected_goals: ScoringRates,
    pub odds: Option<OddsTriple>,
    pub timestamp: DateTime<Utc>,
}
