use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Plate denominations must not be empty.")]
    NoDenominations,
    #[error("Plate denomination {0} must be a positive, finite weight.")]
    InvalidDenomination(f64),
    #[error("Plate denominations must be strictly descending ({0} is followed by {1}).")]
    UnorderedDenominations(f64, f64),
    #[error("No exercise with id {0}.")]
    UnknownExercise(u32),
    #[error("No exercise named {0:?}.")]
    UnknownExerciseName(String),
    #[error("No border color configured for the {0} plate.")]
    UnknownPlate(f64),
    #[error("Invalid bar kind {0:?}, expected 45 or 35.")]
    InvalidBarKind(String),
    #[error("Could not determine a configuration directory.")]
    NoConfigDir,
    #[error("Could not access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
