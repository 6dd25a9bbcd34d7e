use crate::rounding::{round_to_nearest_half, round_to_nearest_loadable_weight};

/// The bar load for one percentage of a max, before plates are picked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Target {
    percentage: u32,
    raw_weight: f64,
    total_weight: f64,
    per_side: f64,
    barbell_weight: f64,
}

impl Target {
    #[must_use]
    pub fn compute(max_weight: f64, percentage: u32, barbell_weight: f64) -> Self {
        let raw_weight = max_weight * f64::from(percentage) / 100.0;
        let total_weight = round_to_nearest_loadable_weight(round_to_nearest_half(raw_weight));
        let per_side = round_to_nearest_half((total_weight - barbell_weight) / 2.0);

        Target {
            percentage,
            raw_weight,
            total_weight,
            per_side,
            barbell_weight,
        }
    }

    #[must_use]
    pub fn percentage(&self) -> u32 {
        self.percentage
    }

    /// `max * percentage / 100`, unrounded.
    #[must_use]
    pub fn raw_weight(&self) -> f64 {
        self.raw_weight
    }

    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Weight to load on each sleeve. Negative when the target is lighter
    /// than the empty bar.
    #[must_use]
    pub fn per_side(&self) -> f64 {
        self.per_side
    }

    #[must_use]
    pub fn barbell_weight(&self) -> f64 {
        self.barbell_weight
    }

    /// False for targets lighter than the bar itself (and for NaN targets).
    #[must_use]
    pub fn is_loadable(&self) -> bool {
        self.total_weight >= self.barbell_weight
    }
}
