//! Configuration loading utilities

use crate::defaults::DEFAULT_CONFIG_FILES;
use crate::schema::CatalogConfig;
use mocatalog_common::{MoError, MoResult};
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "MOCATALOG_CONFIG_PATH";

/// Locale lookup order for the messages category.
pub const LOCALE_ENV_VARS: &[&str] = &["LC_ALL", "LC_MESSAGES", "LANG"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("Failed to parse TOML configuration: {0}")]
    TomlError(#[from] toml::de::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File extension does not map to a known format
    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        /// Variable name.
        var: String,
        /// Parse failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration validation error
    #[error("Configuration validation failed: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

impl From<ConfigError> for MoError {
    fn from(err: ConfigError) -> Self {
        Self::config(err.to_string())
    }
}

/// Serialization formats understood by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.yaml` / `.yml`
    Yaml,
    /// `.toml`
    Toml,
    /// `.json`
    Json,
}

impl ConfigFormat {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Configuration loader for the catalog registry
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<CatalogConfig, ConfigError> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());

        let content = std::fs::read_to_string(path)?;
        let mut config = Self::parse_str(&content, ConfigFormat::from_path(path)?)?;

        Self::apply_env_overrides(&mut config, |var| env::var(var).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from environment variables and files
    pub fn load() -> MoResult<CatalogConfig> {
        if let Ok(config_path) = env::var(CONFIG_PATH_ENV) {
            return Self::load_from_file(config_path);
        }

        if let Some(found) = DEFAULT_CONFIG_FILES
            .iter()
            .map(Path::new)
            .find(|candidate| candidate.exists())
        {
            return Self::load_from_file(found);
        }

        // No config file found, use defaults with env overrides
        debug!("No configuration file found, using defaults");
        let mut config = CatalogConfig::default();
        Self::apply_env_overrides(&mut config, |var| env::var(var).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> MoResult<CatalogConfig> {
        Ok(Self::load_config(path)?)
    }

    /// Parse configuration text in the given format, without overrides.
    pub fn parse_str(content: &str, format: ConfigFormat) -> Result<CatalogConfig, ConfigError> {
        let config = match format {
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
            ConfigFormat::Toml => toml::from_str(content)?,
            ConfigFormat::Json => serde_json::from_str(content)?,
        };
        Ok(config)
    }

    /// Apply environment variable overrides to configuration
    ///
    /// `lookup` returns the value of a variable; the process environment is
    /// passed in by the public loaders.
    pub fn apply_env_overrides<F>(config: &mut CatalogConfig, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(locale) = lookup("MOCATALOG_LOCALE").filter(|value| !value.is_empty()) {
            config.locale = Some(locale);
        }

        if let Some(domain) = lookup("MOCATALOG_DOMAIN") {
            config.default_domain = domain;
        }

        if let Some(level) = lookup("MOCATALOG_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(json) = lookup("MOCATALOG_LOG_JSON") {
            config.logging.json = json.parse().map_err(|e| ConfigError::EnvParseError {
                var: "MOCATALOG_LOG_JSON".to_string(),
                source: Box::new(e),
            })?;
        }

        if config.locale.is_none() {
            config.locale = Self::detect_locale(&lookup);
        }

        Ok(())
    }

    /// Detect the messages locale from `LC_ALL`, `LC_MESSAGES` and `LANG`.
    pub fn detect_locale<F>(lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        LOCALE_ENV_VARS
            .iter()
            .filter_map(|var| lookup(var))
            .find(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("a/mocatalog.YML")).unwrap(),
            ConfigFormat::Yaml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("mocatalog.toml")).unwrap(),
            ConfigFormat::Toml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("mocatalog.json")).unwrap(),
            ConfigFormat::Json
        );
        assert!(matches!(
            ConfigFormat::from_path(Path::new("mocatalog.ini")),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_default_config_files_cover_every_format() {
        let formats: Vec<ConfigFormat> = DEFAULT_CONFIG_FILES
            .iter()
            .map(|name| ConfigFormat::from_path(Path::new(name)).unwrap())
            .collect();
        for format in [ConfigFormat::Yaml, ConfigFormat::Toml, ConfigFormat::Json] {
            assert!(formats.contains(&format), "{format:?} has no default file");
        }
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
locale: "sr_CS.UTF-8@latin"
default_domain: app
bindings:
  app: /usr/share/locale
  "": ./locale
"#;
        let config = ConfigLoader::parse_str(yaml, ConfigFormat::Yaml).unwrap();
        assert_eq!(config.locale.as_deref(), Some("sr_CS.UTF-8@latin"));
        assert_eq!(config.default_domain, "app");
        assert_eq!(config.bindings["app"], "/usr/share/locale");
        assert_eq!(config.bindings[""], "./locale");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
default_domain = "messages"

[bindings]
messages = "/opt/locale"

[logging]
level = "debug"
json = true
"#;
        let config = ConfigLoader::parse_str(toml, ConfigFormat::Toml).unwrap();
        assert_eq!(config.locale, None);
        assert_eq!(config.bindings["messages"], "/opt/locale");
        assert!(config.logging.json);
    }

    #[test]
    fn test_explicit_override_wins_over_detection() {
        let env = env_of(&[("MOCATALOG_LOCALE", "de_DE"), ("LANG", "fr_FR.UTF-8")]);
        let mut config = CatalogConfig::default();

        ConfigLoader::apply_env_overrides(&mut config, |var| env.get(var).cloned()).unwrap();
        assert_eq!(config.locale.as_deref(), Some("de_DE"));
    }

    #[test]
    fn test_configured_locale_is_not_replaced_by_detection() {
        let env = env_of(&[("LANG", "fr_FR.UTF-8")]);
        let mut config = CatalogConfig {
            locale: Some("pt_BR".to_string()),
            ..CatalogConfig::default()
        };

        ConfigLoader::apply_env_overrides(&mut config, |var| env.get(var).cloned()).unwrap();
        assert_eq!(config.locale.as_deref(), Some("pt_BR"));
    }

    #[test]
    fn test_detect_locale_precedence() {
        let env = env_of(&[("LANG", "en_US.UTF-8"), ("LC_MESSAGES", "nl_NL"), ("LC_ALL", "")]);
        assert_eq!(
            ConfigLoader::detect_locale(|var| env.get(var).cloned()).as_deref(),
            Some("nl_NL")
        );

        let empty = HashMap::<String, String>::new();
        assert_eq!(ConfigLoader::detect_locale(|var| empty.get(var).cloned()), None);
    }

    #[test]
    fn test_bad_bool_override() {
        let env = env_of(&[("MOCATALOG_LOG_JSON", "sometimes")]);
        let mut config = CatalogConfig::default();

        let err = ConfigLoader::apply_env_overrides(&mut config, |var| env.get(var).cloned())
            .unwrap_err();
        assert!(err.to_string().contains("MOCATALOG_LOG_JSON"));
    }
}
