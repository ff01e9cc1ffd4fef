use super::types::RunConfig;
use crate::{CatalogError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up in the working directory when no config is given
pub const CONFIG_FILE_NAME: &str = "stockroom.yaml";

/// Configuration loader for run configs
pub struct ConfigLoader {
    /// Directory searched for stockroom.yaml
    search_dir: PathBuf,
}

impl ConfigLoader {
    /// Create loader searching the current working directory
    pub fn new() -> Self {
        Self {
            search_dir: PathBuf::from("."),
        }
    }

    /// Search `dir` instead of the working directory
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            search_dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Load the config from an explicit path, or discover it
    ///
    /// An explicit path must exist and parse. A discovered file is optional;
    /// without one the defaults apply.
    pub fn load(&self, explicit: Option<&Path>) -> Result<RunConfig> {
        if let Some(path) = explicit {
            return self.load_file(path);
        }

        let discovered = self.search_dir.join(CONFIG_FILE_NAME);
        if discovered.is_file() {
            self.load_file(&discovered)
        } else {
            debug!(dir = %self.search_dir.display(), "No config file found, using defaults");
            Ok(RunConfig::default())
        }
    }

    /// Load config file from path
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<RunConfig> {
        let path = path.as_ref();
        let path_str = path.display();

        let contents = std::fs::read_to_string(path).map_err(|e| {
            CatalogError::Config(format!("Failed to read config file {}: {}", path_str, e))
        })?;

        // an empty document means all defaults
        if contents.trim().is_empty() {
            return Ok(RunConfig::default());
        }

        let config: RunConfig = serde_yaml_ng::from_str(&contents).map_err(|e| {
            CatalogError::Config(format!("Failed to parse config file {}: {}", path_str, e))
        })?;

        debug!(
            path = %path_str,
            source = %config.source.display(),
            steps = config.script.len(),
            "Loaded config"
        );
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
