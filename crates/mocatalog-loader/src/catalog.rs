//! Catalog handles and the loader that builds them from `.mo` files

use mocatalog_common::{MoError, MoResult};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

/// A loaded message catalog for one domain.
///
/// Lookups that the catalog cannot answer return the original string, so an
/// empty catalog behaves as an identity translation.
pub struct Catalog {
    inner: gettext::Catalog,
    source: String,
    loaded: bool,
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("source", &self.source)
            .field("loaded", &self.loaded)
            .finish_non_exhaustive()
    }
}

impl Catalog {
    /// A pass-through catalog remembering the path it was asked for.
    pub fn empty(source: impl Into<String>) -> Self {
        Self {
            inner: gettext::Catalog::empty(),
            source: source.into(),
            loaded: false,
        }
    }

    /// Parses a catalog image from `reader`.
    pub fn from_reader<R: Read>(reader: R, source: impl Into<String>) -> MoResult<Self> {
        let source = source.into();
        let inner = gettext::Catalog::parse(reader).map_err(|e| MoError::catalog(&source, e))?;
        Ok(Self {
            inner,
            source,
            loaded: true,
        })
    }

    /// Opens and parses the catalog file at `path`.
    pub fn open(path: &str) -> MoResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), path)
    }

    /// Path this catalog was constructed from; empty when there was none.
    pub fn source_path(&self) -> &str {
        &self.source
    }

    /// Whether the catalog was parsed from a file rather than left empty.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Translates `msgid`.
    pub fn gettext<'a>(&'a self, msgid: &'a str) -> &'a str {
        self.inner.gettext(msgid)
    }

    /// Translates `msgid` in the given message context.
    pub fn pgettext<'a>(&'a self, context: &'a str, msgid: &'a str) -> &'a str {
        self.inner.pgettext(context, msgid)
    }

    /// Translates a message with plural forms, picking the form for `n`.
    pub fn ngettext<'a>(&'a self, msgid: &'a str, msgid_plural: &'a str, n: u64) -> &'a str {
        self.inner.ngettext(msgid, msgid_plural, n)
    }

    /// Context-qualified variant of [`Catalog::ngettext`].
    pub fn npgettext<'a>(
        &'a self,
        context: &'a str,
        msgid: &'a str,
        msgid_plural: &'a str,
        n: u64,
    ) -> &'a str {
        self.inner.npgettext(context, msgid, msgid_plural, n)
    }
}

/// Builds catalogs from resolved paths.
///
/// Implementations must not fail: an empty, missing or unreadable path
/// yields a pass-through catalog.
pub trait CatalogLoader: Send + Sync {
    /// Constructs the catalog for `path`.
    fn load(&self, path: &str) -> Catalog;
}

/// Loads GNU `.mo` files from the filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct MoFileLoader;

impl CatalogLoader for MoFileLoader {
    fn load(&self, path: &str) -> Catalog {
        if path.is_empty() {
            debug!("No catalog path, using pass-through catalog");
            return Catalog::empty(path);
        }

        if !Path::new(path).is_file() {
            debug!("No catalog at {}, using pass-through catalog", path);
            return Catalog::empty(path);
        }

        match Catalog::open(path) {
            Ok(catalog) => {
                info!("Loaded catalog from {}", path);
                catalog
            }
            Err(e) => {
                warn!("Failed to load catalog, using pass-through catalog: {}", e);
                Catalog::empty(path)
            }
        }
    }
}

impl<F> CatalogLoader for F
where
    F: Fn(&str) -> Catalog + Send + Sync,
{
    fn load(&self, path: &str) -> Catalog {
        self(path)
    }
}
