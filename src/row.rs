use std::fmt::Display;

use itertools::Itertools;

use crate::{
    breakdown::{Breakdown, PlateGroup},
    target::Target,
};

/// One loadable line of the percentage table.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    target: Target,
    breakdown: Breakdown,
    groups: Vec<PlateGroup>,
}

impl Row {
    #[must_use]
    pub fn new(target: Target, breakdown: Breakdown) -> Self {
        let groups = breakdown.groups();
        Row {
            target,
            breakdown,
            groups,
        }
    }

    #[must_use]
    pub fn percentage(&self) -> u32 {
        self.target.percentage()
    }

    /// The unrounded target to the nearest whole unit, for display.
    #[must_use]
    pub fn target_weight(&self) -> f64 {
        self.target.raw_weight().round()
    }

    #[must_use]
    pub fn target(&self) -> &Target {
        &self.target
    }

    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.target.total_weight()
    }

    #[must_use]
    pub fn per_side(&self) -> f64 {
        self.target.per_side()
    }

    #[must_use]
    pub fn breakdown(&self) -> &Breakdown {
        &self.breakdown
    }

    #[must_use]
    pub fn groups(&self) -> &[PlateGroup] {
        &self.groups
    }

    #[must_use]
    pub fn residual(&self) -> f64 {
        self.breakdown.residual()
    }
}

impl Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:>3}%  {:>6} lbs  Bar load: {:>6} lbs  [{}]",
            self.percentage(),
            self.target_weight(),
            self.total_weight(),
            self.groups.iter().join(" ")
        )
    }
}
