//! Command dispatch over a configured catalog registry.

use crate::cli::{Cli, Command, RegistryArgs};
use crate::error::CliResult;
use mocatalog_common::MoError;
use mocatalog_config::{CatalogConfig, ConfigLoader};
use mocatalog_loader::{list_locales, Registry};
use serde::Serialize;
use std::io::Write;
use tracing::{debug, info};

/// Output of `candidates`.
#[derive(Debug, Serialize)]
pub struct CandidatesReport {
    /// Locale as given.
    pub locale: String,
    /// Candidate names, most specific first.
    pub candidates: Vec<String>,
}

/// Output of `resolve`.
#[derive(Debug, Serialize)]
pub struct ResolveReport {
    /// Domain after default-domain substitution.
    pub domain: String,
    /// Active locale.
    pub locale: String,
    /// Path handed to the catalog loader.
    pub path: String,
    /// Whether a catalog file exists at `path`.
    pub found: bool,
    /// Whether the catalog parsed successfully.
    pub loaded: bool,
    /// Paths probed, in order.
    pub probed: Vec<String>,
}

/// Output of `translate`.
#[derive(Debug, Serialize)]
pub struct TranslateReport {
    /// Domain after default-domain substitution.
    pub domain: String,
    /// Message id as given.
    pub msgid: String,
    /// Translated text, or the message id when untranslated.
    pub translation: String,
    /// Catalog the translation came from.
    pub catalog: String,
}

/// Loads the configuration named on the command line or found by default.
pub fn load_config(cli: &Cli) -> CliResult<CatalogConfig> {
    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    Ok(config)
}

/// Overlays command line registry settings on `config`.
pub fn merge_args(config: &mut CatalogConfig, args: &RegistryArgs) -> CliResult<()> {
    if let Some(locale) = &args.locale {
        config.locale = Some(locale.clone());
    }
    if let Some(domain) = &args.default_domain {
        config.default_domain = domain.clone();
    }
    for (domain, path) in &args.bindings {
        config.bind(domain.as_str(), path.as_str());
    }
    config.validate().map_err(MoError::from)?;
    Ok(())
}

/// The command line application.
pub struct CatalogApp {
    config: CatalogConfig,
    json: bool,
}

impl CatalogApp {
    /// Creates the application from a loaded configuration.
    pub fn new(config: CatalogConfig, json: bool) -> Self {
        Self { config, json }
    }

    /// Runs `command`, writing its report to `out`.
    pub fn execute<W: Write>(&self, command: &Command, out: &mut W) -> CliResult<()> {
        match command {
            Command::Candidates { locale } => {
                let report = CandidatesReport {
                    locale: locale.clone(),
                    candidates: list_locales(locale),
                };
                self.emit(out, &report, |out| {
                    for candidate in &report.candidates {
                        writeln!(out, "{candidate}")?;
                    }
                    Ok(())
                })
            }
            Command::Resolve { domain, registry } => {
                let registry = self.registry(registry)?;
                let report = Self::resolve(&registry, domain);
                self.emit(out, &report, |out| {
                    for path in &report.probed {
                        debug!("probed {}", path);
                    }
                    let status = if report.loaded {
                        "loaded"
                    } else if report.found {
                        "unreadable"
                    } else {
                        "missing"
                    };
                    writeln!(out, "{}\t{}\t{}", report.domain, status, report.path)?;
                    Ok(())
                })
            }
            Command::Translate {
                msgid,
                domain,
                context,
                plural,
                count,
                registry,
            } => {
                let registry = self.registry(registry)?;
                let catalog = registry.resolve(domain);
                let translation = match (context, plural) {
                    (Some(ctx), Some(plural)) => {
                        catalog.npgettext(ctx, msgid, plural, count.unwrap_or(1))
                    }
                    (None, Some(plural)) => catalog.ngettext(msgid, plural, count.unwrap_or(1)),
                    (Some(ctx), None) => catalog.pgettext(ctx, msgid),
                    (None, None) => catalog.gettext(msgid),
                };
                let report = TranslateReport {
                    domain: Self::effective_domain(&registry, domain),
                    msgid: msgid.clone(),
                    translation: translation.to_string(),
                    catalog: catalog.source_path().to_string(),
                };
                self.emit(out, &report, |out| {
                    writeln!(out, "{}", report.translation)?;
                    Ok(())
                })
            }
        }
    }

    fn registry(&self, args: &RegistryArgs) -> CliResult<Registry> {
        let mut config = self.config.clone();
        merge_args(&mut config, args)?;
        info!(
            "Registry locale {:?}, default domain '{}'",
            config.locale, config.default_domain
        );
        Ok(Registry::from_config(&config))
    }

    fn effective_domain(registry: &Registry, domain: &str) -> String {
        if domain.is_empty() {
            registry.default_domain()
        } else {
            domain.to_string()
        }
    }

    fn resolve(registry: &Registry, domain: &str) -> ResolveReport {
        let resolution = registry.locate(domain);
        let catalog = registry.resolve(domain);
        ResolveReport {
            domain: Self::effective_domain(registry, domain),
            locale: registry.locale(),
            path: resolution.path,
            found: resolution.found,
            loaded: catalog.is_loaded(),
            probed: resolution.probed,
        }
    }

    fn emit<W, T, F>(&self, out: &mut W, report: &T, text: F) -> CliResult<()>
    where
        W: Write,
        T: Serialize,
        F: FnOnce(&mut W) -> CliResult<()>,
    {
        if self.json {
            serde_json::to_writer_pretty(&mut *out, report)
                .map_err(|e| MoError::Serialization(e.to_string()))?;
            writeln!(out)?;
            Ok(())
        } else {
            text(out)
        }
    }
}

/// Loads configuration for `cli` and runs its command.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> CliResult<()> {
    let config = load_config(cli)?;
    CatalogApp::new(config, cli.json).execute(&cli.command, out)
}
