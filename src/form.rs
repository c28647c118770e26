//! Recent-form signals keyed by team.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::probs;

/// Per-match performance multipliers for each team's recent outings. A value of 1.0 is
/// par; above inflates the team's scoring rate, below deflates it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormGuide {
    samples: FxHashMap<String, Vec<f64>>,
}
impl FormGuide {
    pub fn insert(&mut self, team: impl Into<String>, multipliers: Vec<f64>) {
        self.samples.insert(team.into(), multipliers);
    }

    /// Mean multiplier for the given team. An unknown team or an empty sequence yields
    /// the neutral 1.0.
    pub fn multiplier(&self, team: &str) -> f64 {
        match self.samples.get(team) {
            Some(multipliers) if !multipliers.is_empty() => probs::mean(multipliers),
            _ => 1.0,
        }
    }
}

impl<'a, const N: usize> From<[(&'a str, Vec<f64>); N]> for FormGuide {
    fn from(entries: [(&'a str, Vec<f64>); N]) -> Self {
        let mut guide = FormGuide::default();
        for (team, multipliers) in entries {
            guide.insert(team, multipliers);
        }
        guide
    }
}
