//! # mocatalog loader
//!
//! Resolves gettext message catalogs for a domain and a POSIX locale.
//!
//! This crate provides:
//!
//! - Locale fallback enumeration (`sr_CS.UTF-8@latin` down to `sr`)
//! - A registry of domain base directories with per-domain catalog caching
//! - Narrow collaborator traits for the filesystem, `.mo` parsing and the
//!   system locale, with default implementations
//!
//! # Example
//!
//! ```rust
//! use mocatalog_loader::{list_locales, Registry};
//!
//! assert_eq!(list_locales("de_AT.UTF-8"), vec!["de_AT.UTF-8", "de_AT", "de"]);
//!
//! let registry = Registry::new();
//! registry.bind_path("app", "/nonexistent/locale");
//! registry.set_locale("de_AT.UTF-8");
//!
//! // Without a catalog on disk every lookup passes through.
//! assert_eq!(registry.dgettext("app", "Save"), "Save");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod locale;
pub mod probe;
pub mod registry;
pub mod system;

pub use catalog::{Catalog, CatalogLoader, MoFileLoader};
pub use locale::{list_locales, NotPosixLocale, PosixLocale};
pub use probe::{FileProbe, FsProbe};
pub use registry::{catalog_path, locate, Registry, RegistryBuilder, Resolution};
pub use system::{EnvSystemLocale, NoopSystemLocale, SystemLocale};
