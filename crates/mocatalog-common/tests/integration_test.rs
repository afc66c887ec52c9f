//! Integration tests for mocatalog-common crate.

use mocatalog_common::{MoError, MoResult};

#[test]
fn test_config_error_display() {
    let err = MoError::config("missing locale");
    assert_eq!(err.to_string(), "Configuration error: missing locale");
}

#[test]
fn test_catalog_error_display() {
    let err = MoError::catalog("./fr/LC_MESSAGES/app.mo", "bad magic");
    assert_eq!(
        err.to_string(),
        "Catalog error for './fr/LC_MESSAGES/app.mo': bad magic"
    );
}

#[test]
fn test_io_error_conversion() {
    fn open_missing() -> MoResult<()> {
        std::fs::File::open("/nonexistent/mocatalog/file")?;
        Ok(())
    }

    let err = open_missing().unwrap_err();
    assert!(matches!(err, MoError::Io(_)));
    assert!(err.to_string().starts_with("I/O error:"));
}
