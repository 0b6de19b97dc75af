//! Diagnostic error types for the rulebot engine.
//!
//! The engine's public chat operations never return these: persistence
//! failures are recovered at the facade and logged. They surface through the
//! lower-level store and config APIs, and through the CLI.

use miette::Diagnostic;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Store errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum StoreError {
    #[error("failed to read training file: {path}")]
    #[diagnostic(
        code(rulebot::store::read),
        help(
            "The training file exists but could not be read. Check its permissions, \
             or move it aside to start from the built-in responses only."
        )
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to append to training file: {path}")]
    #[diagnostic(
        code(rulebot::store::write),
        help(
            "Check that the directory exists and is writable, and that the disk is not full. \
             The trained answer is still available for this session."
        )
    )]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config file: {path}")]
    #[diagnostic(
        code(rulebot::config::read),
        help("Ensure the config file exists and is readable.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {path}: {message}")]
    #[diagnostic(
        code(rulebot::config::parse),
        help(
            "Check the TOML syntax. Recognized keys are `bot_name`, `training_file`, \
             `memory_only` and `seed`."
        )
    )]
    Parse { path: String, message: String },
}

/// Convenience alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Convenience alias for config loading.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
