//! # mocatalog CLI
//!
//! Command line front end for inspecting locale fallback and catalog
//! resolution.
//!
//! The binary parses arguments into [`Cli`], merges them over the loaded
//! configuration and dispatches through [`CatalogApp`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod cli;
pub mod error;

pub use app::*;
pub use cli::*;
pub use error::*;
