//! User settings: exercises, bar, plate colors and plate sizes.
//!
//! Fields missing from a stored document fall back to their defaults, so an
//! older or partial settings file still loads.

use serde::{Deserialize, Serialize};

use crate::{
    bar_kind::BarKind,
    border_color::{BorderColor, FALLBACK_COLOR},
    calc_error::CalcError,
    denominations::Denominations,
    exercise::ExerciseType,
};

pub const NEW_EXERCISE_NAME: &str = "New Exercise";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_border_colors")]
    pub border_colors: Vec<BorderColor>,

    #[serde(default = "default_exercise_types")]
    pub exercise_types: Vec<ExerciseType>,

    #[serde(default = "default_barbell_weight")]
    pub barbell_weight: f64,

    #[serde(default)]
    pub denominations: Denominations,
}

fn default_border_colors() -> Vec<BorderColor> {
    vec![
        BorderColor::new(45.0, Some("blue")),
        BorderColor::new(35.0, None),
        BorderColor::new(25.0, Some("green")),
        BorderColor::new(10.0, Some("yellow")),
        BorderColor::new(5.0, Some("red")),
        BorderColor::new(2.5, None),
    ]
}

fn default_exercise_types() -> Vec<ExerciseType> {
    vec![
        ExerciseType::new(1, "Deadlift"),
        ExerciseType::new(2, "BenchPress"),
        ExerciseType::new(3, "BackSquat"),
    ]
}

fn default_barbell_weight() -> f64 {
    BarKind::Standard.weight()
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            border_colors: default_border_colors(),
            exercise_types: default_exercise_types(),
            barbell_weight: default_barbell_weight(),
            denominations: Denominations::default(),
        }
    }
}

impl Settings {
    /// The exercise shown when none is picked.
    #[must_use]
    pub fn active_exercise(&self) -> Option<&str> {
        self.exercise_types.first().map(|exercise| exercise.name.as_str())
    }

    #[must_use]
    pub fn exercise(&self, name: &str) -> Option<&ExerciseType> {
        self.exercise_types
            .iter()
            .find(|exercise| exercise.name.eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn border_color(&self, plate: f64) -> &str {
        self.border_colors
            .iter()
            .find(|border| border.plate == plate)
            .map_or(FALLBACK_COLOR, BorderColor::color)
    }

    ///
    /// # Errors
    /// If no border color entry exists for `plate`.
    ///
    pub fn set_border_color(&mut self, plate: f64, color: &str) -> Result<(), CalcError> {
        let border = self
            .border_colors
            .iter_mut()
            .find(|border| border.plate == plate)
            .ok_or(CalcError::UnknownPlate(plate))?;

        border.color = (!color.is_empty()).then(|| color.to_string());
        Ok(())
    }

    ///
    /// # Errors
    /// If no exercise has the given id.
    ///
    pub fn rename_exercise(&mut self, id: u32, name: &str) -> Result<(), CalcError> {
        let exercise = self
            .exercise_types
            .iter_mut()
            .find(|exercise| exercise.id == id)
            .ok_or(CalcError::UnknownExercise(id))?;

        exercise.name = name.to_string();
        Ok(())
    }

    /// Appends a placeholder exercise and returns its id.
    #[allow(clippy::cast_possible_truncation)]
    pub fn add_exercise(&mut self) -> u32 {
        let next_by_len = self.exercise_types.len() as u32 + 1;
        let next_by_id = self
            .exercise_types
            .iter()
            .map(|exercise| exercise.id + 1)
            .max()
            .unwrap_or(1);
        let id = next_by_len.max(next_by_id);

        self.exercise_types
            .push(ExerciseType::new(id, NEW_EXERCISE_NAME));
        id
    }

    ///
    /// # Errors
    /// If no exercise has the given id.
    ///
    pub fn delete_exercise(&mut self, id: u32) -> Result<(), CalcError> {
        let before = self.exercise_types.len();
        self.exercise_types.retain(|exercise| exercise.id != id);

        if self.exercise_types.len() == before {
            return Err(CalcError::UnknownExercise(id));
        }
        Ok(())
    }

    pub fn set_barbell_weight(&mut self, kind: BarKind) {
        self.barbell_weight = kind.weight();
    }

    #[must_use]
    pub fn bar_kind(&self) -> Option<BarKind> {
        BarKind::from_weight(self.barbell_weight)
    }

    ///
    /// # Errors
    /// If the weights do not form a valid, strictly descending plate list.
    ///
    pub fn set_denominations(&mut self, weights: &[f64]) -> Result<(), CalcError> {
        self.denominations = Denominations::new(weights)?;
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Settings::default();
    }
}
