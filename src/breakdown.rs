use std::fmt::Display;

use itertools::Itertools;

use crate::{denominations::Denominations, plate::Plate};

/// The plates to load on one side of the bar, heaviest first.
#[derive(Clone, Debug, PartialEq)]
pub struct Breakdown {
    per_side: f64,
    plates: Vec<Plate>,
}

/// One distinct plate size in a breakdown and how many of it to load.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlateGroup {
    pub plate: Plate,
    pub count: usize,
}

impl PlateGroup {
    #[must_use]
    pub fn new(plate: Plate, count: usize) -> Self {
        PlateGroup { plate, count }
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn weight(&self) -> f64 {
        self.plate.weight() * self.count as f64
    }
}

impl Display for PlateGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.plate, self.count)
    }
}

impl Breakdown {
    #[must_use]
    pub fn new(per_side: f64, denominations: &Denominations) -> Self {
        Breakdown {
            per_side,
            plates: breakdown_plates(per_side, denominations),
        }
    }

    #[must_use]
    pub fn per_side(&self) -> f64 {
        self.per_side
    }

    #[must_use]
    pub fn plates(&self) -> &[Plate] {
        &self.plates
    }

    #[must_use]
    pub fn groups(&self) -> Vec<PlateGroup> {
        group_plates(&self.plates)
    }

    /// Sum of the plates actually picked.
    #[must_use]
    pub fn loaded(&self) -> f64 {
        self.plates.iter().copied().sum::<Plate>().weight()
    }

    /// Weight per side the plates could not make up.
    #[must_use]
    pub fn residual(&self) -> f64 {
        (self.per_side - self.loaded()).max(0.0)
    }
}

/// Greedily splits a per-side weight into plates, heaviest first.
///
/// Whatever is left below the smallest plate is dropped. Negative and
/// non-finite weights need no plates.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn breakdown_plates(per_side: f64, denominations: &Denominations) -> Vec<Plate> {
    if !per_side.is_finite() || per_side <= 0.0 {
        return Vec::new();
    }

    let mut remaining = per_side;
    let mut plates = Vec::new();

    for plate in denominations.plates() {
        let count = (remaining / plate.weight()).floor() as usize;
        plates.extend(std::iter::repeat_n(*plate, count));
        remaining -= count as f64 * plate.weight();
    }

    plates
}

/// Counts each distinct plate, heaviest first.
#[must_use]
pub fn group_plates(plates: &[Plate]) -> Vec<PlateGroup> {
    plates
        .iter()
        .copied()
        .sorted_by(|a, b| b.weight().total_cmp(&a.weight()))
        .chunk_by(|plate| *plate)
        .into_iter()
        .map(|(plate, group)| PlateGroup::new(plate, group.count()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights(plates: &[Plate]) -> Vec<f64> {
        plates.iter().map(Plate::weight).collect()
    }

    #[test]
    fn breaks_down_102_5() {
        let plates = breakdown_plates(102.5, &Denominations::standard());
        assert_eq!(weights(&plates), vec![45.0, 45.0, 10.0, 2.5]);

        let groups = group_plates(&plates);
        assert_eq!(
            groups,
            vec![
                PlateGroup::new(Plate::new(45.0), 2),
                PlateGroup::new(Plate::new(10.0), 1),
                PlateGroup::new(Plate::new(2.5), 1),
            ]
        );
    }

    #[test]
    fn breaks_down_32_5() {
        let plates = breakdown_plates(32.5, &Denominations::standard());
        assert_eq!(weights(&plates), vec![25.0, 5.0, 2.5]);
    }

    #[test]
    fn greedy_takes_the_heaviest_plate_first() {
        let plates = breakdown_plates(60.0, &Denominations::standard());
        assert_eq!(weights(&plates), vec![45.0, 10.0, 5.0]);
    }

    #[test]
    fn drops_residual_below_smallest_plate() {
        let breakdown = Breakdown::new(11.25, &Denominations::standard());
        assert_eq!(weights(breakdown.plates()), vec![10.0]);
        assert_eq!(breakdown.residual(), 1.25);
    }

    #[test]
    fn nothing_to_load_for_empty_or_negative_sides() {
        let standard = Denominations::standard();
        assert!(breakdown_plates(0.0, &standard).is_empty());
        assert!(breakdown_plates(-22.5, &standard).is_empty());
        assert!(breakdown_plates(f64::NAN, &standard).is_empty());
        assert!(breakdown_plates(f64::INFINITY, &standard).is_empty());
    }

    #[test]
    fn sum_never_exceeds_the_request() {
        let standard = Denominations::standard();
        for per_side in (0..2000).map(|i| f64::from(i) * 0.25) {
            let breakdown = Breakdown::new(per_side, &standard);
            assert!(breakdown.loaded() <= per_side);
            assert!(per_side - breakdown.loaded() < standard.smallest().weight());
        }
    }

    #[test]
    fn grouped_plates_expand_back_to_the_same_sum() {
        let standard = Denominations::standard();
        for per_side in (0..400).map(|i| f64::from(i) * 1.5) {
            let breakdown = Breakdown::new(per_side, &standard);
            let regrouped: f64 = breakdown.groups().iter().map(PlateGroup::weight).sum();
            assert_eq!(regrouped, breakdown.loaded());
            assert!(breakdown.groups().iter().all(|group| group.count > 0));
        }
    }

    #[test]
    fn groups_unordered_plates() {
        let groups = group_plates(&Plate::from_weights(&[5.0, 45.0, 5.0, 25.0, 45.0]));
        assert_eq!(
            groups.iter().map(ToString::to_string).collect::<Vec<_>>(),
            vec!["45x2", "25x1", "5x2"]
        );
    }
}
