//! # mocatalog config
//!
//! Configuration for the catalog registry: which locale to activate, the
//! default domain, and the base directory bound to each domain.
//!
//! Configuration is read from YAML, TOML or JSON files and then overridden
//! from the environment.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
