//! Configuration schema definitions using serde.

use crate::loader::ConfigError;
use crate::validator::ConfigValidator;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Main configuration structure for the catalog registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// POSIX locale to activate, e.g. `fr_FR.UTF-8`.
    pub locale: Option<String>,
    /// Domain used when callers resolve the empty domain.
    pub default_domain: String,
    /// Base directory per domain.
    pub bindings: BTreeMap<String, String>,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter level when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON formatted log lines.
    pub json: bool,
}

impl CatalogConfig {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let problems = ConfigValidator::check(self);
        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(problems))
        }
    }

    /// Binds `domain` to `path`, replacing any previous binding.
    pub fn bind(&mut self, domain: impl Into<String>, path: impl Into<String>) -> &mut Self {
        self.bindings.insert(domain.into(), path.into());
        self
    }
}
