use tracing::{debug, warn};

use crate::{
    breakdown::Breakdown, denominations::Denominations, rounding::round_to_nearest_half,
    row::Row, settings::Settings, target::Target,
};

/// Table rows, heaviest first.
pub const PERCENTAGES: [u32; 13] = [100, 95, 90, 85, 80, 75, 70, 65, 60, 55, 50, 45, 40];

/// Turns a max into a percentage table for one bar and plate set.
#[derive(Clone, Debug, PartialEq)]
pub struct Calculator {
    barbell_weight: f64,
    denominations: Denominations,
}

impl Calculator {
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self::with_plates(settings.barbell_weight, settings.denominations.clone())
    }

    #[must_use]
    pub fn with_plates(barbell_weight: f64, denominations: Denominations) -> Self {
        if !denominations.is_exact() {
            warn!(
                plates = ?denominations.weights(),
                "plate sizes are not multiples of the smallest plate; some loads will come up short"
            );
        }

        Calculator {
            barbell_weight,
            denominations,
        }
    }

    #[must_use]
    pub fn barbell_weight(&self) -> f64 {
        self.barbell_weight
    }

    #[must_use]
    pub fn denominations(&self) -> &Denominations {
        &self.denominations
    }

    #[must_use]
    pub fn target(&self, max_weight: f64, percentage: u32) -> Target {
        Target::compute(max_weight, percentage, self.barbell_weight)
    }

    /// Plates for a full bar load, whether or not it came from a percentage.
    #[must_use]
    pub fn breakdown(&self, total_weight: f64) -> Breakdown {
        let per_side = round_to_nearest_half((total_weight - self.barbell_weight) / 2.0);
        Breakdown::new(per_side, &self.denominations)
    }

    /// `None` when the target is lighter than the empty bar.
    #[must_use]
    pub fn row(&self, max_weight: f64, percentage: u32) -> Option<Row> {
        let target = self.target(max_weight, percentage);
        if !target.is_loadable() {
            return None;
        }

        let breakdown = Breakdown::new(target.per_side(), &self.denominations);
        if breakdown.residual() > 0.0 {
            debug!(
                percentage,
                residual = breakdown.residual(),
                "per side weight not fully covered by plates"
            );
        }

        Some(Row::new(target, breakdown))
    }

    #[must_use]
    pub fn table(&self, max_weight: f64) -> Vec<Row> {
        let rows: Vec<Row> = PERCENTAGES
            .iter()
            .filter_map(|percentage| self.row(max_weight, *percentage))
            .collect();

        debug!(
            max_weight,
            barbell_weight = self.barbell_weight,
            rows = rows.len(),
            "computed percentage table"
        );
        rows
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Calculator::new(&Settings::default())
    }
}
