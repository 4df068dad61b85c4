//! Coach configuration loading.
//!
//! Reads the user-editable configuration from a TOML file
//! (`~/.config/motiva/config.toml` by default). Configuration is read-only
//! at runtime; nothing in the engine ever writes it back.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MotivaError, Result};

/// User-editable configuration.
///
/// Every field is optional; a missing value falls back to a built-in default
/// at the point of use, so an empty or absent file is a valid configuration.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct CoachConfig {
    /// Completion model identifier.
    #[serde(default)]
    pub model: Option<String>,
    /// Override for the completion API base URL.
    #[serde(default)]
    pub api_base: Option<String>,
    /// Path to a JSONL change-talk lexicon replacing the built-in one.
    #[serde(default)]
    pub lexicon_path: Option<PathBuf>,
    /// Override for the coach system prompt.
    #[serde(default)]
    pub system_prompt: Option<String>,
}

impl CoachConfig {
    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns `MotivaError::Config` when the file does not exist, `Io` when
    /// it cannot be read, and `Serialization` when it is not valid TOML.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(MotivaError::config(format!(
                "configuration file not found at {}",
                path.display()
            )));
        }
        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Loads the configuration from the default location, falling back to
    /// defaults when no file exists or it cannot be parsed.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            tracing::warn!("could not determine a config directory, using defaults");
            return Self::default();
        };
        Self::load_at_or_default(&path)
    }

    /// `load_or_default` against an explicit path.
    pub fn load_at_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }
        match Self::load_from_path(path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "configuration loaded");
                config
            }
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    %err,
                    "failed to load configuration, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Default configuration path: `<config dir>/motiva/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("motiva").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn loads_partial_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "model = \"gpt-4o\"").unwrap();
        writeln!(file, "lexicon_path = \"/tmp/lexicon.jsonl\"").unwrap();

        let config = CoachConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.model.as_deref(), Some("gpt-4o"));
        assert_eq!(
            config.lexicon_path,
            Some(PathBuf::from("/tmp/lexicon.jsonl"))
        );
        assert_eq!(config.api_base, None);
        assert_eq!(config.system_prompt, None);
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let file = NamedTempFile::new().unwrap();
        let config = CoachConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config, CoachConfig::default());
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = CoachConfig::load_from_path("/nonexistent/config.toml").unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn load_at_or_default_swallows_parse_errors() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "model = [this is not toml").unwrap();

        let config = CoachConfig::load_at_or_default(file.path());
        assert_eq!(config, CoachConfig::default());
    }

    #[test]
    fn load_at_or_default_handles_missing_file() {
        let config = CoachConfig::load_at_or_default(Path::new("/nonexistent/config.toml"));
        assert_eq!(config, CoachConfig::default());
    }
}
