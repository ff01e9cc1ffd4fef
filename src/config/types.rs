use crate::script::Script;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Source file read when nothing else is configured
pub const DEFAULT_SOURCE: &str = "product_data.txt";

/// Root structure of stockroom.yaml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Delimited source file to load
    #[serde(default = "default_source")]
    pub source: PathBuf,

    /// Field delimiter of the source file
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Steps executed after loading
    #[serde(default)]
    pub script: Script,
}

fn default_source() -> PathBuf {
    PathBuf::from(DEFAULT_SOURCE)
}

fn default_delimiter() -> char {
    ','
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            delimiter: default_delimiter(),
            script: Script::default(),
        }
    }
}
