//! Error types for roman-keys

use thiserror::Error;

/// Result type alias for roman-keys operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur at the user-facing edges of roman-keys.
///
/// The analysis engine itself never fails: unknown notes render as `?` and
/// non-chord tokens pass through. These variants cover parsing user
/// selections and reading/writing the configuration file.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unknown ranking mode literal
    #[error("invalid ranking mode {0:?}; expected score, fifths or alphabetical")]
    InvalidRankingMode(String),

    /// Unknown key mode literal
    #[error("invalid mode {0:?}; expected maj/major or min/minor")]
    InvalidMode(String),

    /// Unparseable note name
    #[error("invalid note name {0:?}")]
    InvalidNote(String),

    /// Unparseable key
    #[error("invalid key {0:?}; expected e.g. C:maj or A:min")]
    InvalidKey(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}
