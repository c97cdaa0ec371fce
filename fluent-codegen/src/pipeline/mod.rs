//! Generation pipeline.
//!
//! This module provides a [`Pipeline`] orchestrator that manages one
//! generation run from manifest to filled builders. The pipeline provides:
//!
//! - Explicit phase boundaries (lower → declare → register → generate)
//! - Plugin hooks for extensibility (before/after each phase)
//! - Unified diagnostics collection
//! - Shared state via [`CompilationContext`]
//!
//! # Example
//!
//! ```ignore
//! use fluent_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new().run(manifest)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("{}", diag);
//! }
//!
//! let generator = fluent_codegen_java::Generator::from_context(&ctx);
//! ```

mod config;
mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;

pub use config::GeneratorConfig;
pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use plugin::Plugin;
pub use runner::Pipeline;
