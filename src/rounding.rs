//! Rounding of raw percentage targets to weights that can be put on a bar.

/// Loaded bar weights always land on a multiple of this.
pub const LOADABLE_INCREMENT: f64 = 5.0;

/// Rounds to the nearest multiple of 0.5, ties going up.
///
/// Non-finite input comes back non-finite.
#[must_use]
pub fn round_to_nearest_half(weight: f64) -> f64 {
    (weight * 2.0 + 0.5).floor() / 2.0
}

/// Rounds to the nearest multiple of [`LOADABLE_INCREMENT`].
///
/// A remainder of exactly half the increment rounds up, so `102.5` becomes
/// `105`. Only meaningful for non-negative weights.
#[must_use]
pub fn round_to_nearest_loadable_weight(weight: f64) -> f64 {
    let remainder = weight % LOADABLE_INCREMENT;
    if remainder == 0.0 {
        return weight;
    }

    if remainder < LOADABLE_INCREMENT / 2.0 {
        weight - remainder
    } else {
        weight + (LOADABLE_INCREMENT - remainder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> impl Iterator<Item = f64> {
        (0..4000).map(|i| f64::from(i) * 0.13)
    }

    #[test]
    fn half_rounding_stays_within_a_quarter() {
        for x in samples() {
            let rounded = round_to_nearest_half(x);
            assert_eq!((rounded * 2.0).fract(), 0.0, "{x} -> {rounded}");
            assert!((rounded - x).abs() <= 0.25, "{x} -> {rounded}");
        }
    }

    #[test]
    fn half_rounding_ties_go_up() {
        assert_eq!(round_to_nearest_half(10.25), 10.5);
        assert_eq!(round_to_nearest_half(10.75), 11.0);
        assert_eq!(round_to_nearest_half(10.2), 10.0);
        assert_eq!(round_to_nearest_half(-1.25), -1.0);
    }

    #[test]
    fn half_rounding_propagates_non_finite() {
        assert!(round_to_nearest_half(f64::NAN).is_nan());
        assert_eq!(round_to_nearest_half(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn loadable_weight_is_a_multiple_of_five() {
        for x in samples().map(round_to_nearest_half) {
            let loadable = round_to_nearest_loadable_weight(x);
            assert_eq!(loadable % LOADABLE_INCREMENT, 0.0, "{x} -> {loadable}");
            assert!((loadable - x).abs() <= 2.5, "{x} -> {loadable}");
        }
    }

    #[test]
    fn loadable_weight_midpoint_rounds_up() {
        assert_eq!(round_to_nearest_loadable_weight(102.5), 105.0);
        assert_eq!(round_to_nearest_loadable_weight(102.0), 100.0);
        assert_eq!(round_to_nearest_loadable_weight(252.0), 250.0);
        assert_eq!(round_to_nearest_loadable_weight(253.0), 255.0);
        assert_eq!(round_to_nearest_loadable_weight(100.0), 100.0);
    }

    #[test]
    fn loadable_weight_is_idempotent() {
        for x in samples().map(round_to_nearest_half) {
            let once = round_to_nearest_loadable_weight(x);
            assert_eq!(round_to_nearest_loadable_weight(once), once);
        }
    }
}
