//! A calibrated forecaster of two-team match outcomes. Distils bookmaker odds or
//! Elo-style ratings into expected scoring rates, expands those into an independent
//! Poisson scoreline grid, and blends the collapsed win/draw/win probabilities with
//! the market-implied view into a single normalised forecast.

pub mod domain;
pub mod form;
pub mod market;
pub mod model;
pub mod poisson;
pub mod print;
pub mod probs;
pub mod rates;
pub mod scoregrid;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
