//! Common error and result types.

/// Result type for mocatalog operations.
pub type MoResult<T> = std::result::Result<T, MoError>;

/// Workspace-wide error type.
///
/// Catalog resolution itself never fails; these variants cover the layers
/// around it (configuration, the system locale hook, I/O in the CLI).
#[derive(thiserror::Error, Debug)]
pub enum MoError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A catalog file could not be read or parsed.
    #[error("Catalog error for '{path}': {message}")]
    Catalog {
        /// Path of the offending catalog file.
        path: String,
        /// Underlying failure description.
        message: String,
    },

    /// The system locale facility rejected a locale.
    #[error("System locale error: {0}")]
    SystemLocale(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A report could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl MoError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a catalog error for the given path.
    pub fn catalog(path: impl Into<String>, message: impl ToString) -> Self {
        Self::Catalog {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
