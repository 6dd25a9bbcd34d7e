use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Heaviest max accepted. Anything above is treated as a typo.
pub const MAX_ACCEPTED_WEIGHT: f64 = 10_000.0;

/// One-rep maxes keyed by exercise name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaxWeights {
    weights: BTreeMap<String, f64>,
}

impl MaxWeights {
    #[must_use]
    pub fn new(weights: BTreeMap<String, f64>) -> Self {
        MaxWeights { weights }
    }

    /// The recorded max, or 0 for exercises never entered. Stored values
    /// out of range also read as 0.
    #[must_use]
    pub fn get(&self, exercise: &str) -> f64 {
        match self.weights.get(exercise).copied() {
            Some(weight) if Self::is_accepted(weight) => weight,
            Some(weight) => {
                warn!(exercise, weight, "ignoring stored max weight out of range");
                0.0
            }
            None => 0.0,
        }
    }

    pub fn set(&mut self, exercise: &str, weight: f64) {
        self.weights.insert(exercise.to_string(), weight);
    }

    #[must_use]
    pub fn exercises(&self) -> Vec<&str> {
        self.weights.keys().map(String::as_str).collect()
    }

    /// Reads a max typed by the user. Anything that is not a finite number
    /// between 0 and [`MAX_ACCEPTED_WEIGHT`] counts as 0.
    #[must_use]
    pub fn parse_input(input: &str) -> f64 {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return 0.0;
        }

        match trimmed.parse::<f64>() {
            Ok(weight) if Self::is_accepted(weight) => weight,
            _ => {
                warn!(input, "ignoring max weight that is not a number between 0 and {MAX_ACCEPTED_WEIGHT}");
                0.0
            }
        }
    }

    fn is_accepted(weight: f64) -> bool {
        weight.is_finite() && (0.0..=MAX_ACCEPTED_WEIGHT).contains(&weight)
    }
}

impl IntoIterator for MaxWeights {
    type Item = (String, f64);
    type IntoIter = std::collections::btree_map::IntoIter<String, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.weights.into_iter()
    }
}
