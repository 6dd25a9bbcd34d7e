use serde::{Deserialize, Serialize};

/// Shown for plates with no color of their own.
pub const FALLBACK_COLOR: &str = "#ccc";

/// The border color a plate is drawn with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BorderColor {
    pub plate: f64,
    #[serde(default)]
    pub color: Option<String>,
}

impl BorderColor {
    #[must_use]
    pub fn new(plate: f64, color: Option<&str>) -> Self {
        BorderColor {
            plate,
            color: color.map(str::to_string),
        }
    }

    #[must_use]
    pub fn color(&self) -> &str {
        self.color
            .as_deref()
            .filter(|color| !color.is_empty())
            .unwrap_or(FALLBACK_COLOR)
    }
}
