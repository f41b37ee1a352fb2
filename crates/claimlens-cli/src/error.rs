//! Error types for the claimlens binary.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced to the user.
///
/// Pipeline stages never error (they degrade); everything here comes from
/// argument handling, configuration, or output rendering.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file invalid or collaborators could not be wired
    #[error("Configuration error: {0}")]
    Config(String),

    /// Video URL or id not recognized
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Reading or writing the configuration file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report could not be rendered as JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration file is not valid TOML
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
