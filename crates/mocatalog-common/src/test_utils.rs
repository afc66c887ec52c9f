//! Test utilities and shared test helpers for mocatalog.
//!
//! This module provides logging setup, temporary directories and a writer for
//! small GNU `.mo` catalogs so tests across the workspace can lay out real
//! locale trees on disk.

use std::path::{Path, PathBuf};
use std::sync::Once;

#[cfg(feature = "tracing-subscriber")]
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
#[cfg(feature = "tracing-subscriber")]
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// No-op version when tracing-subscriber is not available
#[cfg(not(feature = "tracing-subscriber"))]
pub fn init_test_logging() {
    INIT.call_once(|| {});
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Helpers for producing binary message catalogs.
pub mod mo_fixtures {
    use super::{Path, PathBuf};

    /// Magic number of a GNU message catalog, written little-endian.
    pub const MO_MAGIC: u32 = 0x9504_12de;

    /// Metadata entry stored under the empty msgid.
    pub const MO_METADATA: &str = "Content-Type: text/plain; charset=UTF-8\n";

    /// Builds a little-endian `.mo` image from `(msgid, msgstr)` pairs.
    ///
    /// Plural entries use `\0` between forms and context entries use `\u{4}`
    /// between context and msgid, as in the on-disk format. The metadata
    /// header is always added.
    #[allow(clippy::cast_possible_truncation)]
    pub fn build_mo(entries: &[(&str, &str)]) -> Vec<u8> {
        let mut pairs: Vec<(&str, &str)> = Vec::with_capacity(entries.len() + 1);
        pairs.push(("", MO_METADATA));
        pairs.extend(entries.iter().copied());
        pairs.sort_by(|a, b| a.0.cmp(b.0));

        let count = pairs.len() as u32;
        let originals_offset = 28u32;
        let translations_offset = originals_offset + 8 * count;
        let strings_offset = translations_offset + 8 * count;

        let mut out = Vec::new();
        for word in [
            MO_MAGIC,
            0,
            count,
            originals_offset,
            translations_offset,
            0,
            strings_offset,
        ] {
            out.extend_from_slice(&word.to_le_bytes());
        }

        let mut table = Vec::new();
        let mut blob = Vec::new();
        let mut cursor = strings_offset;
        let originals = pairs.iter().map(|(original, _)| *original);
        let translations = pairs.iter().map(|(_, translated)| *translated);
        for text in originals.chain(translations) {
            let len = text.len() as u32;
            table.push((len, cursor));
            blob.extend_from_slice(text.as_bytes());
            blob.push(0);
            cursor += len + 1;
        }

        for (len, offset) in table {
            out.extend_from_slice(&len.to_le_bytes());
            out.extend_from_slice(&offset.to_le_bytes());
        }
        out.extend_from_slice(&blob);
        out
    }

    /// Writes `{base}/{locale}/LC_MESSAGES/{domain}.mo` and returns its path.
    pub fn write_catalog(
        base: &Path,
        locale: &str,
        domain: &str,
        entries: &[(&str, &str)],
    ) -> PathBuf {
        let dir = base.join(locale).join("LC_MESSAGES");
        std::fs::create_dir_all(&dir).expect("Failed to create LC_MESSAGES directory");
        let path = dir.join(format!("{domain}.mo"));
        std::fs::write(&path, build_mo(entries)).expect("Failed to write catalog");
        path
    }

    /// Writes a file that is not a valid catalog at the catalog location.
    pub fn write_garbage_catalog(base: &Path, locale: &str, domain: &str) -> PathBuf {
        let dir = base.join(locale).join("LC_MESSAGES");
        std::fs::create_dir_all(&dir).expect("Failed to create LC_MESSAGES directory");
        let path = dir.join(format!("{domain}.mo"));
        std::fs::write(&path, b"definitely not a catalog").expect("Failed to write file");
        path
    }
}

/// Converts a path to the string form the registry works with.
pub fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
