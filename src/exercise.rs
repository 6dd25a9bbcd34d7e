use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExerciseType {
    pub id: u32,
    pub name: String,
}

impl ExerciseType {
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        ExerciseType {
            id,
            name: name.into(),
        }
    }
}
