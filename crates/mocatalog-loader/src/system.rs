//! Hooks for propagating the active locale to the host system

use mocatalog_common::{MoError, MoResult};
use tracing::debug;

/// Applies a locale at the process or operating-system level.
///
/// The registry calls this on every non-empty `set_locale` and ignores the
/// result.
pub trait SystemLocale: Send + Sync {
    /// Applies `locale` to the messages category.
    fn apply(&self, locale: &str) -> MoResult<()>;
}

/// Leaves the host untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSystemLocale;

impl SystemLocale for NoopSystemLocale {
    fn apply(&self, _locale: &str) -> MoResult<()> {
        Ok(())
    }
}

/// Exports the locale as `LC_MESSAGES` in the process environment.
///
/// Child processes and later environment-based detection see the new value.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvSystemLocale;

impl EnvSystemLocale {
    /// Variable written by [`EnvSystemLocale::apply`].
    pub const VARIABLE: &'static str = "LC_MESSAGES";
}

impl SystemLocale for EnvSystemLocale {
    fn apply(&self, locale: &str) -> MoResult<()> {
        if locale.contains(['\0', '=']) {
            return Err(MoError::SystemLocale(format!(
                "locale '{}' cannot be stored in the environment",
                locale.escape_debug()
            )));
        }
        debug!("Setting {}={}", Self::VARIABLE, locale);
        std::env::set_var(Self::VARIABLE, locale);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_accepts_anything() {
        assert!(NoopSystemLocale.apply("xx_YY").is_ok());
        assert!(NoopSystemLocale.apply("").is_ok());
    }

    #[test]
    fn test_env_rejects_unstorable_values() {
        let err = EnvSystemLocale.apply("de=DE").unwrap_err();
        assert!(matches!(err, MoError::SystemLocale(_)));
        assert!(EnvSystemLocale.apply("de\0").is_err());
    }
}
