//! Domain/path registry with per-domain catalog caching
//!
//! # Invariants
//!
//! 1. **Fallback binding**: the empty domain is bound to `./` until
//!    overwritten, and bindings are never removed.
//!
//! 2. **Compute once**: each domain is resolved at most once per registry.
//!    Concurrent first requests for a domain block on the same cell and all
//!    receive the handle built by the winning caller.
//!
//! 3. **No invalidation**: a cached handle is returned even after
//!    `set_locale` or `bind_path` change the inputs that produced it.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Empty locale | `set_locale` never called | Catalog built from `""` |
//! | No candidate file | Nothing under the base directory | Catalog built from last probed path |
//! | Unreadable catalog | Corrupt `.mo` file | Loader returns a pass-through catalog |
//! | System locale rejected | `SystemLocale::apply` fails | Logged and ignored |

use crate::catalog::{Catalog, CatalogLoader, MoFileLoader};
use crate::locale::list_locales;
use crate::probe::{FileProbe, FsProbe};
use crate::system::{NoopSystemLocale, SystemLocale};
use mocatalog_config::{CatalogConfig, DEFAULT_BASE_DIR};
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Builds `{base}/{locale}/LC_MESSAGES/{domain}.mo`.
///
/// The parts are joined textually, so a base of `./` produces `.//`.
pub fn catalog_path(base: &str, locale: &str, domain: &str) -> String {
    format!("{base}/{locale}/LC_MESSAGES/{domain}.mo")
}

/// Result of probing the candidate paths for one domain.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Resolution {
    /// Path handed to the catalog loader.
    pub path: String,
    /// Whether `path` was reported as existing.
    pub found: bool,
    /// Every path probed, in order.
    pub probed: Vec<String>,
}

/// Probes the candidates for `locale` under `base` and picks a catalog path.
///
/// Stops at the first existing file. Without a hit the last probed path is
/// kept, or the empty string when `locale` produced no candidates.
pub fn locate(probe: &dyn FileProbe, base: &str, domain: &str, locale: &str) -> Resolution {
    let mut resolution = Resolution::default();

    for candidate in list_locales(locale) {
        let path = catalog_path(base, &candidate, domain);
        let exists = probe.exists(&path);
        debug!("Probed {} (exists: {})", path, exists);

        resolution.probed.push(path.clone());
        resolution.path = path;
        if exists {
            resolution.found = true;
            break;
        }
    }

    resolution
}

type CatalogCell = Arc<OnceCell<Arc<Catalog>>>;

struct RegistryState {
    active_locale: String,
    default_domain: String,
    path_bindings: HashMap<String, String>,
    catalogs: HashMap<String, CatalogCell>,
}

impl RegistryState {
    fn new() -> Self {
        let mut path_bindings = HashMap::new();
        path_bindings.insert(String::new(), DEFAULT_BASE_DIR.to_string());

        Self {
            active_locale: String::new(),
            default_domain: String::new(),
            path_bindings,
            catalogs: HashMap::new(),
        }
    }

    fn base_for(&self, domain: &str) -> String {
        self.path_bindings
            .get(domain)
            .cloned()
            .unwrap_or_else(|| DEFAULT_BASE_DIR.to_string())
    }
}

/// Tracks the active locale, domain bindings and resolved catalogs.
///
/// A registry is an ordinary value; build one at startup and share it by
/// reference (it is `Send + Sync`).
///
/// # Example
///
/// ```
/// use mocatalog_loader::Registry;
///
/// let registry = Registry::new();
/// registry.bind_path("app", "/nonexistent/locale");
/// registry.set_default_domain("app");
/// registry.set_locale("fr_FR.UTF-8");
///
/// let catalog = registry.resolve("");
/// assert_eq!(catalog.gettext("Hello"), "Hello");
/// ```
pub struct Registry {
    state: Mutex<RegistryState>,
    probe: Box<dyn FileProbe>,
    loader: Box<dyn CatalogLoader>,
    system_locale: Box<dyn SystemLocale>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("Registry")
            .field("active_locale", &state.active_locale)
            .field("default_domain", &state.default_domain)
            .field("path_bindings", &state.path_bindings)
            .field("cached_domains", &state.catalogs.len())
            .finish_non_exhaustive()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Registry using the real filesystem and `.mo` loader.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts a builder for swapping collaborators.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Registry with default collaborators, configured from `config`.
    pub fn from_config(config: &CatalogConfig) -> Self {
        let registry = Self::new();
        registry.configure(config);
        registry
    }

    /// Applies bindings, default domain and locale from `config`.
    pub fn configure(&self, config: &CatalogConfig) {
        for (domain, path) in &config.bindings {
            self.bind_path(domain, path);
        }
        self.set_default_domain(&config.default_domain);
        if let Some(locale) = &config.locale {
            self.set_locale(locale);
        }
    }

    /// Binds `domain` to the base directory `path`.
    pub fn bind_path(&self, domain: &str, path: &str) {
        debug!("Binding domain '{}' to {}", domain, path);
        self.state
            .lock()
            .path_bindings
            .insert(domain.to_string(), path.to_string());
    }

    /// Sets the domain used when resolving the empty domain.
    pub fn set_default_domain(&self, domain: &str) {
        self.state.lock().default_domain = domain.to_string();
    }

    /// Activates `locale` and returns the active locale.
    ///
    /// Empty input leaves the active locale unchanged. A failure to apply
    /// the locale at system level is ignored.
    ///
    /// The system locale is applied under the state lock, so concurrent
    /// calls leave it agreeing with the active locale.
    pub fn set_locale(&self, locale: &str) -> String {
        if locale.is_empty() {
            return self.locale();
        }

        let mut state = self.state.lock();
        state.active_locale = locale.to_string();
        if let Err(e) = self.system_locale.apply(locale) {
            debug!("Ignoring system locale failure for '{}': {}", locale, e);
        }
        locale.to_string()
    }

    /// Returns the catalog for `domain`, resolving it on first use.
    ///
    /// The empty domain stands for the default domain. Handles are cached
    /// for the life of the registry, see the module invariants.
    pub fn resolve(&self, domain: &str) -> Arc<Catalog> {
        let (domain, cell) = {
            let mut state = self.state.lock();
            let domain = if domain.is_empty() {
                state.default_domain.clone()
            } else {
                domain.to_string()
            };
            let cell = Arc::clone(state.catalogs.entry(domain.clone()).or_default());
            (domain, cell)
        };

        if let Some(catalog) = cell.get() {
            debug!("Catalog cache hit for domain '{}'", domain);
            return Arc::clone(catalog);
        }

        Arc::clone(cell.get_or_init(|| self.construct(&domain)))
    }

    /// Probes the catalog path for `domain` without touching the cache.
    pub fn locate(&self, domain: &str) -> Resolution {
        let domain = if domain.is_empty() {
            self.default_domain()
        } else {
            domain.to_string()
        };
        self.locate_domain(&domain)
    }

    fn locate_domain(&self, domain: &str) -> Resolution {
        let (base, locale) = {
            let state = self.state.lock();
            (state.base_for(domain), state.active_locale.clone())
        };
        locate(self.probe.as_ref(), &base, domain, &locale)
    }

    fn construct(&self, domain: &str) -> Arc<Catalog> {
        let resolution = self.locate_domain(domain);
        let catalog = self.loader.load(&resolution.path);
        info!(
            "Resolved domain '{}' to '{}' (found: {})",
            domain, resolution.path, resolution.found
        );
        Arc::new(catalog)
    }

    /// Active locale; empty until one is set.
    pub fn locale(&self) -> String {
        self.state.lock().active_locale.clone()
    }

    /// Domain used for empty-domain lookups.
    pub fn default_domain(&self) -> String {
        self.state.lock().default_domain.clone()
    }

    /// Base directory explicitly bound to `domain`.
    pub fn bound_path(&self, domain: &str) -> Option<String> {
        self.state.lock().path_bindings.get(domain).cloned()
    }

    /// Whether a catalog for `domain` has been resolved.
    pub fn is_cached(&self, domain: &str) -> bool {
        self.state
            .lock()
            .catalogs
            .get(domain)
            .is_some_and(|cell| cell.get().is_some())
    }

    /// Resolved domains in sorted order.
    pub fn cached_domains(&self) -> Vec<String> {
        let state = self.state.lock();
        let mut domains: Vec<String> = state
            .catalogs
            .iter()
            .filter(|(_, cell)| cell.get().is_some())
            .map(|(domain, _)| domain.clone())
            .collect();
        domains.sort();
        domains
    }

    /// Translates `msgid` in the default domain.
    pub fn gettext(&self, msgid: &str) -> String {
        self.dgettext("", msgid)
    }

    /// Translates `msgid` in `domain`.
    pub fn dgettext(&self, domain: &str, msgid: &str) -> String {
        self.resolve(domain).gettext(msgid).to_string()
    }

    /// Translates a plural message in `domain`.
    pub fn dngettext(&self, domain: &str, msgid: &str, msgid_plural: &str, n: u64) -> String {
        self.resolve(domain)
            .ngettext(msgid, msgid_plural, n)
            .to_string()
    }

    /// Translates `msgid` with a message context in `domain`.
    pub fn dpgettext(&self, domain: &str, context: &str, msgid: &str) -> String {
        self.resolve(domain).pgettext(context, msgid).to_string()
    }
}

/// Builder for a [`Registry`] with custom collaborators.
pub struct RegistryBuilder {
    probe: Box<dyn FileProbe>,
    loader: Box<dyn CatalogLoader>,
    system_locale: Box<dyn SystemLocale>,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self {
            probe: Box::new(FsProbe),
            loader: Box::new(MoFileLoader),
            system_locale: Box::new(NoopSystemLocale),
        }
    }
}

impl RegistryBuilder {
    /// Replaces the filesystem probe.
    #[must_use]
    pub fn probe(mut self, probe: impl FileProbe + 'static) -> Self {
        self.probe = Box::new(probe);
        self
    }

    /// Replaces the catalog loader.
    #[must_use]
    pub fn loader(mut self, loader: impl CatalogLoader + 'static) -> Self {
        self.loader = Box::new(loader);
        self
    }

    /// Replaces the system locale hook.
    #[must_use]
    pub fn system_locale(mut self, system_locale: impl SystemLocale + 'static) -> Self {
        self.system_locale = Box::new(system_locale);
        self
    }

    /// Builds the registry.
    pub fn build(self) -> Registry {
        Registry {
            state: Mutex::new(RegistryState::new()),
            probe: self.probe,
            loader: self.loader,
            system_locale: self.system_locale,
        }
    }
}
