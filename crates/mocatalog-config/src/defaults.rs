//! Default values.

use crate::schema::{CatalogConfig, LoggingConfig};
use std::collections::BTreeMap;

/// Log level used when neither the configuration nor `RUST_LOG` set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Base directory used for domains without an explicit binding, including
/// the initial binding of the empty domain.
pub const DEFAULT_BASE_DIR: &str = "./";

/// Configuration file names probed in the working directory, in order.
pub const DEFAULT_CONFIG_FILES: &[&str] = &[
    "mocatalog.yaml",
    "mocatalog.yml",
    "mocatalog.toml",
    "mocatalog.json",
];

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            locale: None,
            default_domain: String::new(),
            bindings: BTreeMap::new(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json: false,
        }
    }
}
