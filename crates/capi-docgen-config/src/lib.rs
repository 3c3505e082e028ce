use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid file pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },
}

const DEFAULT_RESOURCES_DIR: &str = "source/includes/resources";
const DEFAULT_FILE_PATTERN: &str = "*.md";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Checkout of the API docs repository.
    pub docs_path: PathBuf,
    /// Directory under `docs_path` holding one subdirectory per resource.
    #[serde(default = "default_resources_dir")]
    pub resources_dir: PathBuf,
    /// Glob matched against file names to pick the docs to extract.
    #[serde(default = "default_file_pattern")]
    pub file_pattern: String,
}

fn default_resources_dir() -> PathBuf {
    PathBuf::from(DEFAULT_RESOURCES_DIR)
}

fn default_file_pattern() -> String {
    DEFAULT_FILE_PATTERN.to_string()
}

impl Config {
    pub fn new(docs_path: impl Into<PathBuf>) -> Self {
        Self {
            docs_path: docs_path.into(),
            resources_dir: default_resources_dir(),
            file_pattern: default_file_pattern(),
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded docs path
        config.docs_path = Self::expand_path(&config.docs_path).unwrap_or(config.docs_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/capi-docgen");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Directory the per-resource doc folders live in.
    pub fn resources_root(&self) -> PathBuf {
        self.docs_path.join(&self.resources_dir)
    }

    pub fn file_matcher(&self) -> Result<glob::Pattern, ConfigError> {
        glob::Pattern::new(&self.file_pattern).map_err(|source| ConfigError::InvalidPattern {
            pattern: self.file_pattern.clone(),
            source,
        })
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/capi-docgen/config.toml"));
    }

    #[test]
    fn test_config_defaults_when_only_docs_path_given() {
        let config: Config = toml::from_str(r#"docs_path = "/tmp/docs""#).unwrap();

        assert_eq!(config.docs_path, PathBuf::from("/tmp/docs"));
        assert_eq!(config.resources_dir, PathBuf::from("source/includes/resources"));
        assert_eq!(config.file_pattern, "*.md");
    }

    #[test]
    fn test_resources_root() {
        let config = Config::new("/tmp/docs");

        assert_eq!(
            config.resources_root(),
            PathBuf::from("/tmp/docs/source/includes/resources")
        );
    }

    #[test]
    fn test_file_matcher() {
        let mut config = Config::new("/tmp/docs");
        let matcher = config.file_matcher().unwrap();

        assert!(matcher.matches("_create.md"));
        assert!(!matcher.matches("notes.txt"));

        config.file_pattern = "_*.md".to_string();
        let matcher = config.file_matcher().unwrap();
        assert!(matcher.matches("_create.md"));
        assert!(!matcher.matches("index.md"));
    }

    #[test]
    fn test_invalid_file_pattern() {
        let mut config = Config::new("/tmp/docs");
        config.file_pattern = "[".to_string();

        let result = config.file_matcher();
        assert!(matches!(result, Err(ConfigError::InvalidPattern { .. })));
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path);

        assert!(expanded.is_some());
        let expanded = expanded.unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("CAPI_DOCGEN_TEST_VAR", "/test/env/path");
        }

        let path = PathBuf::from("$CAPI_DOCGEN_TEST_VAR/subdir");
        let expanded = Config::expand_path(&path);

        assert_eq!(expanded, Some(PathBuf::from("/test/env/path/subdir")));

        unsafe {
            env::remove_var("CAPI_DOCGEN_TEST_VAR");
        }
    }

    #[test]
    fn test_expand_path_with_absolute_path() {
        let path = PathBuf::from("/absolute/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "docs_path = [").unwrap();

        let result = Config::load_from_path(&config_file);

        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested/config.toml");
        let mut test_config = Config::new("/tmp/test-docs");
        test_config.resources_dir = PathBuf::from("resources");

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config.docs_path, test_config.docs_path);
        assert_eq!(loaded_config.resources_dir, PathBuf::from("resources"));
        assert_eq!(loaded_config.file_pattern, "*.md");
    }

    #[test]
    fn test_config_with_env_var_in_toml() {
        unsafe {
            env::set_var("CAPI_DOCS_ROOT", "/custom/docs");
        }

        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "docs_path = \"$CAPI_DOCS_ROOT/v3\"\n").unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(config.docs_path, PathBuf::from("/custom/docs/v3"));

        unsafe {
            env::remove_var("CAPI_DOCS_ROOT");
        }
    }
}
