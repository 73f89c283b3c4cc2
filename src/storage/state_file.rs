use crate::model::{BreachState, StorageError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Flat file holding the breach price, or nothing when there is no breach.
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the persisted state. Any read or parse problem yields no breach.
    pub fn load(&self) -> BreachState {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) => {
                debug!("No readable state at {}: {}", self.path.display(), e);
                return BreachState::absent();
            }
        };

        match content.trim().parse::<f64>() {
            Ok(price) if price.is_finite() => BreachState::at(price),
            _ => BreachState::absent(),
        }
    }

    /// Rewrites the whole file.
    pub fn save(&self, state: BreachState) -> Result<(), StorageError> {
        let content = state
            .below_price
            .map(|p| p.to_string())
            .unwrap_or_default();

        fs::write(&self.path, content).map_err(|source| StorageError::Write {
            path: self.path.display().to_string(),
            source,
        })
    }
}
