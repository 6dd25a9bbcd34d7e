use std::{fmt::Display, str::FromStr};

use crate::calc_error::CalcError;

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Ord, Eq, Hash)]
pub enum BarKind {
    Standard,
    Womens,
}

impl BarKind {
    #[must_use]
    pub fn weight(&self) -> f64 {
        match self {
            BarKind::Standard => 45.0,
            BarKind::Womens => 35.0,
        }
    }

    #[must_use]
    pub fn from_weight(weight: f64) -> Option<BarKind> {
        [BarKind::Standard, BarKind::Womens]
            .into_iter()
            .find(|kind| kind.weight() == weight)
    }
}

impl Display for BarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BarKind::Standard => write!(f, "45 lbs"),
            BarKind::Womens => write!(f, "35 lbs"),
        }
    }
}

impl FromStr for BarKind {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "45" | "standard" | "s" => Ok(BarKind::Standard),
            "35" | "womens" | "w" => Ok(BarKind::Womens),
            _ => Err(CalcError::InvalidBarKind(s.to_string())),
        }
    }
}
