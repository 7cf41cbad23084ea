//! @ai:module:intent Complexity limits and vocabulary for a lint run, loadable from TOML
//! @ai:module:layer infrastructure
//! @ai:module:public_api LintConfig
//! @ai:module:depends_on vocabulary, error
//! @ai:module:stateless true

use crate::error::{Error, Result};
use crate::vocabulary::Vocabulary;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// @ai:intent Configuration for the linter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintConfig {
    #[serde(default = "default_max_functions")]
    pub max_functions: usize,
    #[serde(default = "default_max_inputs")]
    pub max_inputs: usize,
    #[serde(default = "default_max_rule_length")]
    pub max_rule_length: usize,
    #[serde(default = "default_max_rules")]
    pub max_rules: usize,
    /// File extensions picked up when linting a directory.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub vocabulary: Vocabulary,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            max_functions: default_max_functions(),
            max_inputs: default_max_inputs(),
            max_rule_length: default_max_rule_length(),
            max_rules: default_max_rules(),
            extensions: default_extensions(),
            vocabulary: Vocabulary::default(),
        }
    }
}

fn default_max_functions() -> usize {
    10
}

fn default_max_inputs() -> usize {
    6
}

fn default_max_rule_length() -> usize {
    200
}

fn default_max_rules() -> usize {
    15
}

fn default_extensions() -> Vec<String> {
    vec!["simplex".to_string()]
}

impl LintConfig {
    /// @ai:intent Load configuration from a TOML file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config = toml::from_str(&content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            source: e,
        })?;

        tracing::debug!("Loaded lint config from {}", path.display());
        Ok(config)
    }

    /// @ai:intent Save configuration to a TOML file
    /// @ai:effects fs:write
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// @ai:intent Check if a path has one of the configured spec extensions
    /// @ai:effects pure
    pub fn is_spec_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.extensions.iter().any(|e| e == ext))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = LintConfig::default();
        assert_eq!(config.max_functions, 10);
        assert_eq!(config.max_inputs, 6);
        assert_eq!(config.max_rule_length, 200);
        assert_eq!(config.max_rules, 15);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: LintConfig = toml::from_str("max_rules = 3").unwrap();
        assert_eq!(config.max_rules, 3);
        assert_eq!(config.max_inputs, 6);
        assert_eq!(config.vocabulary, Vocabulary::default());
    }

    #[test]
    fn test_save_then_load() {
        let file = NamedTempFile::with_suffix(".toml").unwrap();
        let config = LintConfig {
            max_functions: 4,
            ..Default::default()
        };

        config.save(file.path()).unwrap();
        let loaded = LintConfig::load(file.path()).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let file = NamedTempFile::with_suffix(".toml").unwrap();
        std::fs::write(file.path(), "max_rules = \"many\"").unwrap();

        let err = LintConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_is_spec_file() {
        let config = LintConfig::default();
        assert!(config.is_spec_file(Path::new("orders.simplex")));
        assert!(!config.is_spec_file(Path::new("README.md")));
        assert!(!config.is_spec_file(Path::new("simplex")));
    }
}
