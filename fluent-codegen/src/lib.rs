//! Builder registry, builder generation and the code model for the fluent
//! builder generator.
//!
//! # Module Organization
//!
//! - [`builder`] - declarative type, member and statement specifications
//! - [`code_model`] - declared types and the [`Emitter`](code_model::Emitter) seam
//! - [`generation`] - Phase 1 registry and Phase 2 builder generator
//! - [`pipeline`] - lower, declare, register and generate phases with plugins
//! - [`language`] - abstractions implemented by language renderers
//! - [`output`] - writing generated files
//! - [`testing`] - interpreter and compile checkers (feature-gated)

pub mod builder;
pub mod code_model;
pub mod generation;
pub mod language;
pub mod output;
pub mod pipeline;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
