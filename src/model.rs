//! The outcome calibrator: expands scoring rates into a scoreline grid, collapses it
//! into win/draw/win probabilities and fuses them with the market view.

use chrono::Utc;
use thiserror::Error;

use crate::domain::{Prediction, RatingPair};
use crate::form::FormGuide;
use crate::market::{InvalidOdds, Market, OddsTriple};
use crate::rates::{self, StrengthSignal};
use crate::scoregrid::{ScoreGrid, MAX_GOALS};

/// Weight given to the Poisson model in the calibration blend. The model is the
/// primary signal; the market anchors it against factors (team news, sentiment) the
/// model cannot see.
pub const MODEL_BLEND_WEIGHT: f64 = 0.6;
pub const MARKET_BLEND_WEIGHT: f64 = 0.4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlendWeights {
    pub model: f64,
    pub market: f64,
}
impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            model: MODEL_BLEND_WEIGHT,
            market: MARKET_BLEND_WEIGHT,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub max_goals: u8,
    pub blend: BlendWeights,
    pub form_damping: f64,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            max_goals: MAX_GOALS,
            blend: BlendWeights::default(),
            form_damping: rates::FORM_DAMPING,
        }
    }
}

#[derive(Debug, Error)]
pub enum InvalidConfig {
    #[error("max_goals must be at least 1")]
    ZeroMaxGoals,

    #[error("blend weights {model} and {market} must be non-negative and sum to 1")]
    MalformedBlend { model: f64, market: f64 },

    #[error("form damping {0} must lie in [0, 1]")]
    MalformedDamping(f64),
}

/// Malformed or missing inputs. Surfaced immediately; nothing is retried and no
/// partial prediction is ever produced.
#[derive(Debug, Error)]
pub enum InvalidInput {
    #[error("neither odds nor ratings supplied")]
    MissingStrengthSignal,

    #[error("{0}")]
    Odds(#[from] InvalidOdds),

    #[error("rating {rating} is not finite")]
    NonFiniteRating { rating: f64 },

    #[error("scoring rates {home}/{away} leave no probability mass within the grid")]
    VanishedMass { home: f64, away: f64 },
}

/// One match to be forecast. Odds take precedence over ratings as the strength signal
/// when both are supplied; the form guide applies in either mode.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchRequest<'a> {
    pub home_team: &'a str,
    pub away_team: &'a str,
    pub odds: Option<OddsTriple>,
    pub ratings: Option<RatingPair>,
    pub form: Option<&'a FormGuide>,
}

/// A stateless forecasting engine. Holds only policy, so a single instance may be
/// shared freely across threads.
pub struct Predictor {
    config: Config,
}
impl Predictor {
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn predict(&self, request: &MatchRequest) -> Result<Prediction, InvalidInput> {
        let signal = self.strength_signal(request)?;
        let mut expected_goals = signal.scoring_rates();
        if let Some(guide) = request.form {
            expected_goals = rates::adjust_for_form(
                expected_goals,
                guide,
                request.home_team,
                request.away_team,
                self.config.form_damping,
            );
        }

        let grid = ScoreGrid::from_poisson(&expected_goals, self.config.max_goals);
        let mut probs = grid.outcomes();
        if let Some(market) = signal.market() {
            let BlendWeights { model, market: anchor } = self.config.blend;
            let [home, draw, away] = market.probs;
            probs.home = model * probs.home + anchor * home;
            probs.draw = model * probs.draw + anchor * draw;
            probs.away = model * probs.away + anchor * away;
        }
        if probs.sum() <= 0.0 {
            // a sufficiently extreme rate underflows every cell of the grid; without a
            // market anchor there is nothing left to normalise
            return Err(InvalidInput::VanishedMass {
                home: expected_goals.home,
                away: expected_goals.away,
            });
        }
        probs.normalise();

        Ok(Prediction {
            home_team: request.home_team.to_string(),
            away_team: request.away_team.to_string(),
            winner: probs.winner(),
            probs,
            expected_goals,
            odds: request.odds,
            timestamp: Utc::now(),
        })
    }

    fn strength_signal(&self, request: &MatchRequest) -> Result<StrengthSignal, InvalidInput> {
        if let Some(odds) = request.odds {
            return Ok(StrengthSignal::Market(Market::fit(odds)?));
        }
        if let Some(ratings) = request.ratings {
            for rating in [ratings.home, ratings.away] {
                if !rating.is_finite() {
                    return Err(InvalidInput::NonFiniteRating { rating });
                }
            }
            return Ok(StrengthSignal::Ratings(ratings));
        }
        Err(InvalidInput::MissingStrengthSignal)
    }
}

impl TryFrom<Config> for Predictor {
    type Error = InvalidConfig;

    fn try_from(config: Config) -> Result<Self, Self::Error> {
        if config.max_goals == 0 {
            return Err(InvalidConfig::ZeroMaxGoals);
        }
        let BlendWeights { model, market } = config.blend;
        if model < 0.0 || market < 0.0 || (model + market - 1.0).abs() > 1e-9 {
            return Err(InvalidConfig::MalformedBlend { model, market });
        }
        if !(0.0..=1.0).contains(&config.form_damping) {
            return Err(InvalidConfig::MalformedDamping(config.form_damping));
        }
        Ok(Self { config })
    }
}

#[cfg(test)]
mod tests;
