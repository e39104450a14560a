//! Project configuration
//!
//! Loaded from `.pace.config.json`; every field has a default so a missing or
//! partial file is fine.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = ".pace.config.json";

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_rules_path() -> PathBuf {
    PathBuf::from(".pace/rules.json")
}

fn default_format() -> String {
    "markdown".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: String,

    /// Project rules file layered over the built-in rules
    #[serde(default = "default_rules_path")]
    pub rules: PathBuf,

    /// Default output format (markdown, text, json)
    #[serde(default = "default_format")]
    pub format: String,

    /// Treat answer validation issues as errors
    #[serde(default)]
    pub strict: bool,

    /// Modules always dropped from generated paths
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            rules: default_rules_path(),
            format: default_format(),
            strict: false,
            exclude: Vec::new(),
        }
    }
}

impl Config {
    /// Load config from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load from `path`, or fall back to defaults when no file exists there.
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{ "strict": true }"#).unwrap();
        assert!(config.strict);
        assert_eq!(config.rules, PathBuf::from(".pace/rules.json"));
        assert_eq!(config.format, "markdown");
        assert!(config.exclude.is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_CONFIG_PATH);

        let config = Config {
            format: "json".to_string(),
            exclude: vec!["Slide Design Workshop".to_string()],
            ..Default::default()
        };
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_or_default() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_CONFIG_PATH);

        assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());

        std::fs::write(&path, r#"{ "format": "text" }"#).unwrap();
        assert_eq!(Config::load_or_default(&path).unwrap().format, "text");

        std::fs::write(&path, "{ not json").unwrap();
        assert!(Config::load_or_default(&path).is_err());
    }

    #[test]
    fn test_load_missing_file_errors() {
        let temp = TempDir::new().unwrap();
        assert!(Config::load(temp.path().join("nope.json")).is_err());
    }
}
