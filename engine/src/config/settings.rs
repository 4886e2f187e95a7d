// Engine settings, loaded from a JSON file or falling back to defaults.
use crate::error::EngineError;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EngineSettings {
    /// Records per blocking parse task.
    pub chunk_size: usize,
    /// Upper bound on chunks parsed concurrently.
    pub max_parallel_chunks: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            chunk_size: 256,
            max_parallel_chunks: 4,
        }
    }
}

impl EngineSettings {
    /// Load settings from a JSON file. Missing fields take their defaults;
    /// zero values are rejected since both knobs are used as divisors of
    /// the batch.
    pub fn from_file(path: &Path) -> Result<Self, EngineError> {
        let raw = std::fs::read_to_string(path)?;
        let settings: EngineSettings = serde_json::from_str(&raw)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), EngineError> {
        if self.chunk_size == 0 {
            return Err(EngineError::ConfigError(
                "chunk_size must be greater than 0".to_string(),
            ));
        }
        if self.max_parallel_chunks == 0 {
            return Err(EngineError::ConfigError(
                "max_parallel_chunks must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
