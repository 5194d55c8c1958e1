use crate::error::SimResult;
use crate::metrics::BackendChoice;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Startup configuration for a comparison run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Cosine backend; `auto` prefers TF-IDF when compiled in
    pub cosine_backend: BackendChoice,

    /// Default log filter when neither `RUST_LOG` nor `--verbose` is set
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cosine_backend: BackendChoice::Auto,
            log_level: "WARN".to_string(),
        }
    }
}

impl Config {
    /// Load config from `path`, or from the default location when `None`
    ///
    /// A missing file yields defaults. An unreadable or invalid file is an
    /// error; the binary logs it and degrades to defaults.
    pub fn load(path: Option<&Path>) -> SimResult<Self> {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(config_path);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("transcript-similarity")
        .join("config.json")
}
