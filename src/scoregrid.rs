//! The scoreline probability grid and its collapse into match outcomes.

use std::ops::{Index, IndexMut};

use crate::domain::{OutcomeProbs, ScoringRates};
use crate::poisson;
use crate::probs::SliceExt;

/// Goal cutoff per side. A 7×7 grid captures about 99.9% of the joint mass for
/// realistic scoring rates; the residual tail is truncated, not redistributed.
pub const MAX_GOALS: u8 = 6;

/// Joint scoreline probabilities: cell `(i, j)` holds the probability of the home side
/// scoring `i` goals and the away side `j`, with goals modelled as two independent
/// Poisson processes. Independence is a deliberate simplification; it ignores the
/// mild correlation real scorelines exhibit.
pub struct ScoreGrid {
    data: Vec<f64>,
    dim: usize,
}
impl ScoreGrid {
    /// Builds the grid from the product of the two univariate Poisson pmfs, with goals
    /// per side capped at `max_goals`.
    pub fn from_poisson(rates: &ScoringRates, max_goals: u8) -> Self {
        let dim = max_goals as usize + 1;
        let mut grid = Self {
            data: vec![0.0; dim * dim],
            dim,
        };
        for home_goals in 0..dim {
            let home_prob = poisson::univariate(home_goals as u8, rates.home);
            for away_goals in 0..dim {
                let away_prob = poisson::univariate(away_goals as u8, rates.away);
                grid[(home_goals, away_goals)] = home_prob * away_prob;
            }
        }
        grid
    }

    /// Rows (equivalently columns) in the grid: `max_goals + 1`.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Total probability captured by the grid; falls short of 1 by the truncated tail.
    pub fn total_mass(&self) -> f64 {
        self.data.sum()
    }

    /// Collapses the grid into win/draw/win probabilities: cells below the main
    /// diagonal are home wins, the diagonal draws, above it away wins. The three sum
    /// to the grid's total mass, not to 1.
    pub fn outcomes(&self) -> OutcomeProbs {
        let mut home = 0.0;
        for row in 1..self.dim {
            for col in 0..row {
                home += self[(row, col)];
            }
        }

        let mut draw = 0.0;
        for index in 0..self.dim {
            draw += self[(index, index)];
        }

        let mut away = 0.0;
        for col in 1..self.dim {
            for row in 0..col {
                away += self[(row, col)];
            }
        }

        OutcomeProbs { home, draw, away }
    }

    /// Mean home and away goals implied by the (truncated) grid.
    pub fn expectations(&self) -> (f64, f64) {
        let (mut home_expectation, mut away_expectation) = (0.0, 0.0);
        for home_goals in 0..self.dim {
            for away_goals in 0..self.dim {
                let prob = self[(home_goals, away_goals)];
                home_expectation += home_goals as f64 * prob;
                away_expectation += away_goals as f64 * prob;
            }
        }
        (home_expectation, away_expectation)
    }
}

impl Index<(usize, usize)> for ScoreGrid {
    type Output = f64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.dim + col]
    }
}

impl IndexMut<(usize, usize)> for ScoreGrid {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.dim + col]
    }
}
