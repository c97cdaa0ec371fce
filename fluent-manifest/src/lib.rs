//! Parsing and validation of `fluent.toml` class schemas.
//!
//! A manifest declares generator settings and the classes that get
//! builders. Errors are [`miette`] diagnostics pointing into the source.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod template;

pub use error::{Error, Result, SourceContext};
pub use manifest::*;
pub use template::starter;
