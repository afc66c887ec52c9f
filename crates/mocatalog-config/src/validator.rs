//! Runtime validation of loaded configuration.

use crate::schema::CatalogConfig;
use mocatalog_common::MoResult;

/// Levels accepted by `logging.level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration.
    pub fn validate(config: &CatalogConfig) -> MoResult<()> {
        config.validate().map_err(Into::into)
    }

    /// Collects every problem found in `config`.
    ///
    /// Domain names become file names on disk, so they may not contain path
    /// separators. The empty domain is allowed since it is the fallback binding.
    pub fn check(config: &CatalogConfig) -> Vec<String> {
        let mut problems = Vec::new();

        for (domain, path) in &config.bindings {
            if domain.contains(['/', '\\']) {
                problems.push(format!("domain '{domain}' contains a path separator"));
            }
            if path.is_empty() {
                problems.push(format!("binding for domain '{domain}' has an empty path"));
            }
        }

        if config.default_domain.contains(['/', '\\']) {
            problems.push(format!(
                "default domain '{}' contains a path separator",
                config.default_domain
            ));
        }

        if let Some(locale) = &config.locale {
            if locale.contains(['/', '\\']) {
                problems.push(format!("locale '{locale}' contains a path separator"));
            }
        }

        let level = config.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            problems.push(format!("unknown log level '{}'", config.logging.level));
        }

        problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConfigValidator::check(&CatalogConfig::default()).is_empty());
    }

    #[test]
    fn test_rejects_separator_in_domain() {
        let mut config = CatalogConfig::default();
        config.bind("../app", "/srv/locale");

        let problems = ConfigValidator::check(&config);
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("path separator"));
    }

    #[test]
    fn test_rejects_empty_binding_path() {
        let mut config = CatalogConfig::default();
        config.bind("app", "");

        let problems = ConfigValidator::check(&config);
        assert_eq!(problems, vec!["binding for domain 'app' has an empty path"]);
    }

    #[test]
    fn test_log_level_is_case_insensitive() {
        let mut config = CatalogConfig::default();
        config.logging.level = "DEBUG".to_string();
        assert!(ConfigValidator::validate(&config).is_ok());

        config.logging.level = "loud".to_string();
        assert!(ConfigValidator::validate(&config).is_err());
    }

    #[test]
    fn test_collects_all_problems() {
        let mut config = CatalogConfig::default();
        config.bind("a/b", "");
        config.default_domain = "x\\y".to_string();
        config.logging.level = "verbose".to_string();

        assert_eq!(ConfigValidator::check(&config).len(), 4);
    }
}
