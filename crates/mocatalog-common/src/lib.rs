//! # mocatalog common
//!
//! Shared error types and test utilities for the mocatalog workspace.
//!
//! This crate provides the error vocabulary used by the configuration layer,
//! the catalog loader and the command line front end.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use types::*;
