use std::{fmt::Display, iter::Sum};

use serde::{Deserialize, Serialize};

/// A single plate size, in the same unit as the bar and max weights.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plate {
    weight: f64,
}

impl Plate {
    #[must_use]
    pub fn new(weight: f64) -> Self {
        Plate { weight }
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    #[must_use]
    pub fn from_weights(weights: &[f64]) -> Vec<Plate> {
        weights.iter().copied().map(Plate::new).collect()
    }
}

impl Sum for Plate {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Plate::new(0.0), |acc, plate| {
            Plate::new(acc.weight + plate.weight)
        })
    }
}

impl Display for Plate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.weight)
    }
}
