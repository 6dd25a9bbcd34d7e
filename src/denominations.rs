use serde::{Deserialize, Serialize};

use crate::{calc_error::CalcError, plate::Plate};

pub const STANDARD_PLATES: [f64; 6] = [45.0, 35.0, 25.0, 10.0, 5.0, 2.5];

/// The plate sizes available for loading, heaviest first.
///
/// Breakdowns take plates greedily in this order. That only comes out exact
/// when every plate is a whole multiple of the smallest one, which
/// [`Denominations::is_exact`] checks. Greedy is not guaranteed to use the
/// fewest plates either: with the standard set, 60 per side loads as
/// 45 + 10 + 5 rather than 35 + 25.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Denominations {
    plates: Vec<Plate>,
}

impl Denominations {
    ///
    /// # Errors
    /// If the list is empty, holds a non-positive or non-finite weight, or is
    /// not strictly descending.
    ///
    pub fn new(weights: &[f64]) -> Result<Self, CalcError> {
        if weights.is_empty() {
            return Err(CalcError::NoDenominations);
        }

        if let Some(&bad) = weights.iter().find(|w| !w.is_finite() || **w <= 0.0) {
            return Err(CalcError::InvalidDenomination(bad));
        }

        if let Some(pair) = weights.windows(2).find(|pair| pair[0] <= pair[1]) {
            return Err(CalcError::UnorderedDenominations(pair[0], pair[1]));
        }

        Ok(Denominations {
            plates: Plate::from_weights(weights),
        })
    }

    #[must_use]
    pub fn standard() -> Self {
        Denominations {
            plates: Plate::from_weights(&STANDARD_PLATES),
        }
    }

    #[must_use]
    pub fn plates(&self) -> &[Plate] {
        &self.plates
    }

    #[must_use]
    pub fn weights(&self) -> Vec<f64> {
        self.plates.iter().map(Plate::weight).collect()
    }

    #[must_use]
    pub fn smallest(&self) -> Plate {
        // Never empty once constructed.
        self.plates[self.plates.len() - 1]
    }

    /// Whether every plate is a whole multiple of the smallest plate, which
    /// makes the greedy breakdown exact for any multiple of the smallest.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        let smallest = self.smallest().weight();
        self.plates.iter().all(|plate| {
            let ratio = plate.weight() / smallest;
            (ratio - ratio.round()).abs() < 1e-9
        })
    }
}

impl Default for Denominations {
    fn default() -> Self {
        Denominations::standard()
    }
}

impl TryFrom<Vec<f64>> for Denominations {
    type Error = CalcError;

    fn try_from(weights: Vec<f64>) -> Result<Self, Self::Error> {
        Denominations::new(&weights)
    }
}

impl From<Denominations> for Vec<f64> {
    fn from(denominations: Denominations) -> Self {
        denominations.weights()
    }
}
