//! Engine configuration and its TOML file form.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::store::DEFAULT_TRAINING_FILE;

/// Default name the bot introduces itself with.
pub const DEFAULT_BOT_NAME: &str = "CodeAlpha Bot";

/// Configuration for the rulebot engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Training file to load at startup and append to. `None` for
    /// memory-only mode.
    pub training_file: Option<PathBuf>,
    /// Name substituted into built-in replies and the self-introduction.
    pub bot_name: String,
    /// Seed for context-fallback selection. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            training_file: Some(PathBuf::from(DEFAULT_TRAINING_FILE)),
            bot_name: DEFAULT_BOT_NAME.to_string(),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Memory-only configuration: nothing is loaded or written.
    pub fn memory_only() -> Self {
        Self {
            training_file: None,
            ..Self::default()
        }
    }
}

/// On-disk configuration, persisted as TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Bot display name.
    #[serde(default)]
    pub bot_name: Option<String>,
    /// Training file path; relative paths resolve against the working directory.
    #[serde(default)]
    pub training_file: Option<PathBuf>,
    /// Disable the training file entirely.
    #[serde(default)]
    pub memory_only: bool,
    /// RNG seed for reproducible sessions.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl FileConfig {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Resolve into an engine config, filling gaps with defaults.
    pub fn into_engine_config(self) -> EngineConfig {
        let defaults = EngineConfig::default();
        let training_file = if self.memory_only {
            None
        } else {
            self.training_file.or(defaults.training_file)
        };
        EngineConfig {
            training_file,
            bot_name: self.bot_name.unwrap_or(defaults.bot_name),
            seed: self.seed,
        }
    }
}
