//! Argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Inspect locale fallback and gettext catalog resolution.
#[derive(Debug, Parser)]
#[command(name = "mocatalog", version, about)]
pub struct Cli {
    /// Configuration file (YAML, TOML or JSON).
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print machine readable JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the locale names tried for a locale, most specific first.
    Candidates {
        /// POSIX locale, e.g. `sr_CS.UTF-8@latin`.
        locale: String,
    },

    /// Show which catalog file a domain resolves to.
    Resolve {
        /// Domain to resolve; the default domain when omitted.
        #[arg(default_value = "")]
        domain: String,

        #[command(flatten)]
        registry: RegistryArgs,
    },

    /// Translate a message through the resolved catalog.
    Translate {
        /// Message id to translate.
        msgid: String,

        /// Domain to translate in; the default domain when omitted.
        #[arg(long, short, default_value = "")]
        domain: String,

        /// Message context.
        #[arg(long)]
        context: Option<String>,

        /// Plural message id; requires `--count`.
        #[arg(long, requires = "count")]
        plural: Option<String>,

        /// Count selecting the plural form.
        #[arg(long, short = 'n')]
        count: Option<u64>,

        #[command(flatten)]
        registry: RegistryArgs,
    },
}

/// Registry settings that override the configuration file.
#[derive(Debug, Clone, Default, Args)]
pub struct RegistryArgs {
    /// Locale to activate.
    #[arg(long, short)]
    pub locale: Option<String>,

    /// Default domain.
    #[arg(long)]
    pub default_domain: Option<String>,

    /// Bind a domain to a base directory, as `DOMAIN=PATH`.
    #[arg(long = "bind", value_name = "DOMAIN=PATH", value_parser = parse_binding)]
    pub bindings: Vec<(String, String)>,
}

/// Parses `DOMAIN=PATH`; an empty domain binds the fallback directory.
pub fn parse_binding(value: &str) -> Result<(String, String), String> {
    let (domain, path) = value
        .split_once('=')
        .ok_or_else(|| format!("expected DOMAIN=PATH, got '{value}'"))?;
    if path.is_empty() {
        return Err(format!("binding for domain '{domain}' has an empty path"));
    }
    Ok((domain.to_string(), path.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_binding() {
        assert_eq!(
            parse_binding("app=/usr/share/locale"),
            Ok(("app".to_string(), "/usr/share/locale".to_string()))
        );
        assert_eq!(
            parse_binding("=./locale"),
            Ok((String::new(), "./locale".to_string()))
        );
        assert!(parse_binding("app").is_err());
        assert!(parse_binding("app=").is_err());
    }

    #[test]
    fn test_parse_translate() {
        let cli = Cli::try_parse_from([
            "mocatalog",
            "translate",
            "file",
            "--plural",
            "files",
            "-n",
            "3",
            "--bind",
            "app=/l",
            "-d",
            "app",
            "--json",
        ])
        .unwrap();

        assert!(cli.json);
        match cli.command {
            Command::Translate {
                msgid,
                domain,
                plural,
                count,
                registry,
                ..
            } => {
                assert_eq!(msgid, "file");
                assert_eq!(domain, "app");
                assert_eq!(plural.as_deref(), Some("files"));
                assert_eq!(count, Some(3));
                assert_eq!(registry.bindings, vec![("app".to_string(), "/l".to_string())]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_plural_requires_count() {
        assert!(Cli::try_parse_from(["mocatalog", "translate", "a", "--plural", "b"]).is_err());
    }
}
