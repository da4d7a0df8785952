//! Configuration file support for roman-keys
//!
//! Configuration is stored in TOML format at:
//! - Linux: `~/.config/roman-keys/config.toml`
//! - macOS: `~/Library/Application Support/roman-keys/config.toml`
//! - Windows: `%APPDATA%\roman-keys\config.toml`

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::rank::RankingMode;
use crate::report::{AnalysisOptions, LineMode};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default ordering of candidate keys
    pub ranking: RankingMode,
    /// Analyze minor keys as well as major keys
    pub include_minor: bool,
    /// How multi-line input is handled
    pub line_mode: LineMode,
}

impl Config {
    /// Load configuration from the default config file location
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Err(Error::Config(format!("Config file not found at {:?}", path)))
        }
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration or return default if not found
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(Error::Config(msg)) => {
                log::debug!("{msg}; using defaults");
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring unreadable config: {e}");
                Self::default()
            }
        }
    }

    /// Save configuration to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path
    pub fn config_path() -> Result<PathBuf> {
        if let Some(proj_dirs) = ProjectDirs::from("", "", "roman-keys") {
            Ok(proj_dirs.config_dir().join("config.toml"))
        } else {
            Err(Error::Config("Could not determine config directory".to_string()))
        }
    }

    /// Create a default config file with comments
    pub fn create_default_config_file() -> Result<PathBuf> {
        let path = Self::config_path()?;
        Self::write_default_config(&path)?;
        Ok(path)
    }

    fn write_default_config(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = r#"# roman-keys configuration file

# Ordering of candidate keys: "score", "fifths" or "alphabetical"
ranking = "score"

# Also analyze the 21 minor keys
include_minor = false

# "per-line": every line gets its own ranked report
# "combined": all lines are one progression
line_mode = "per-line"
"#;

        fs::write(path, content)?;
        Ok(())
    }

    /// Analysis options described by this configuration
    pub fn to_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            ranking: self.ranking,
            include_minor: self.include_minor,
            line_mode: self.line_mode,
            top: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        Config::write_default_config(&path).expect("write");
        let loaded = Config::load_from(&path).expect("load");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");
        let config = Config {
            ranking: RankingMode::Fifths,
            include_minor: true,
            line_mode: LineMode::Combined,
        };
        config.save_to(&path).expect("save");
        assert_eq!(Config::load_from(&path).expect("load"), config);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = toml::from_str("ranking = \"alphabetical\"").expect("parse");
        assert_eq!(config.ranking, RankingMode::Alphabetical);
        assert!(!config.include_minor);
        assert_eq!(config.line_mode, LineMode::PerLine);
    }

    #[test]
    fn unknown_ranking_is_rejected() {
        assert!(toml::from_str::<Config>("ranking = \"loudest\"").is_err());
    }

    #[test]
    fn options_carry_config_values() {
        let config = Config {
            ranking: RankingMode::Fifths,
            include_minor: true,
            line_mode: LineMode::Combined,
        };
        let opts = config.to_options();
        assert_eq!(opts.ranking, RankingMode::Fifths);
        assert!(opts.include_minor);
        assert_eq!(opts.line_mode, LineMode::Combined);
        assert_eq!(opts.top, None);
    }
}
