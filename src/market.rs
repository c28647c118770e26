//! Bookmaker odds and the probabilities implied by them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::probs::SliceExt;

const MIN_PRICE: f64 = 1.04;
const MAX_PRICE: f64 = 10001.0;

/// Decimal prices quoted against the three outcomes of a match.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OddsTriple {
    pub home: f64,
    pub draw: f64,
    pub away: f64,
}
impl OddsTriple {
    pub fn new(home: f64, draw: f64, away: f64) -> Self {
        Self { home, draw, away }
    }

    pub fn validate(&self) -> Result<(), InvalidOdds> {
        for price in [self.home, self.draw, self.away] {
            if !price.is_finite() {
                return Err(InvalidOdds::NonFinite { price });
            }
            if price <= 0.0 {
                return Err(InvalidOdds::NonPositive { price });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum InvalidOdds {
    #[error("price {price} is not finite")]
    NonFinite { price: f64 },

    #[error("price {price} is not strictly positive")]
    NonPositive { price: f64 },
}

/// A three-outcome market with the bookmaker margin stripped out.
///
/// `probs` are ordered home, draw, away and sum to 1; `overround` is the booksum of the
/// quoted prices (multiplicative method), typically a few percent above 1 for a real book.
#[derive(Clone, Debug, PartialEq)]
pub struct Market {
    pub probs: [f64; 3],
    pub prices: OddsTriple,
    pub overround: f64,
}
impl Market {
    /// Fits a fair market to the given prices, after validating them.
    pub fn fit(prices: OddsTriple) -> Result<Self, InvalidOdds> {
        prices.validate()?;
        let mut probs = [prices.home, prices.draw, prices.away];
        probs.invert();
        let overround = probs.normalise(1.0);
        Ok(Self {
            probs,
            prices,
            overround,
        })
    }

    /// Reconstitutes prices from fair probabilities at the given overround.
    pub fn frame(probs: [f64; 3], overround: f64) -> Self {
        let [home, draw, away] = probs.map(|prob| multiply_capped(1.0 / prob, overround));
        Self {
            probs,
            prices: OddsTriple { home, draw, away },
            overround,
        }
    }
}

pub fn multiply_capped(fair_price: f64, overround: f64) -> f64 {
    let quotient = fair_price / overround;
    if quotient.is_finite() {
        f64::min(f64::max(MIN_PRICE, quotient), MAX_PRICE)
    } else {
        quotient
    }
}
