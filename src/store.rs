//! JSON files holding settings and maxes between runs.
//!
//! Stored at: ~/.config/platecalc/{settings,weights}.json

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::{calc_error::CalcError, max_weights::MaxWeights, settings::Settings};

const APP_DIR: &str = "platecalc";
const SETTINGS_FILE: &str = "settings.json";
const WEIGHTS_FILE: &str = "weights.json";

#[derive(Debug)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    #[must_use]
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Store { dir: dir.into() }
    }

    ///
    /// # Errors
    /// If the platform has no configuration directory.
    ///
    pub fn default_location() -> Result<Self, CalcError> {
        let dir = dirs::config_dir().ok_or(CalcError::NoConfigDir)?.join(APP_DIR);
        Ok(Store::open(dir))
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.dir.join(SETTINGS_FILE)
    }

    #[must_use]
    pub fn weights_path(&self) -> PathBuf {
        self.dir.join(WEIGHTS_FILE)
    }

    ///
    /// # Errors
    /// If the settings file exists but cannot be read or parsed.
    ///
    pub fn load_settings(&self) -> Result<Settings, CalcError> {
        Ok(Self::read(&self.settings_path())?.unwrap_or_default())
    }

    ///
    /// # Errors
    /// If the settings file cannot be written.
    ///
    pub fn save_settings(&self, settings: &Settings) -> Result<(), CalcError> {
        self.write(&self.settings_path(), settings)
    }

    /// Forgets stored settings so the next load returns the defaults.
    ///
    /// # Errors
    /// If the settings file exists and cannot be removed.
    ///
    pub fn clear_settings(&self) -> Result<(), CalcError> {
        let path = self.settings_path();
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(path = %path.display(), "removed stored settings");
                Ok(())
            }
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(CalcError::Io { path, source }),
        }
    }

    ///
    /// # Errors
    /// If the weights file exists but cannot be read or parsed.
    ///
    pub fn load_weights(&self) -> Result<MaxWeights, CalcError> {
        Ok(Self::read(&self.weights_path())?.unwrap_or_default())
    }

    ///
    /// # Errors
    /// If the weights file cannot be written.
    ///
    pub fn save_weights(&self, weights: &MaxWeights) -> Result<(), CalcError> {
        self.write(&self.weights_path(), weights)
    }

    fn read<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, CalcError> {
        if !path.exists() {
            debug!(path = %path.display(), "nothing stored yet");
            return Ok(None);
        }

        let content = fs::read_to_string(path).map_err(|source| CalcError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let value = serde_json::from_str(&content).map_err(|source| CalcError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), "loaded");
        Ok(Some(value))
    }

    fn write<T: Serialize>(&self, path: &Path, value: &T) -> Result<(), CalcError> {
        fs::create_dir_all(&self.dir).map_err(|source| CalcError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let content = serde_json::to_string_pretty(value).map_err(|source| CalcError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, content).map_err(|source| CalcError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), "saved");
        Ok(())
    }
}
