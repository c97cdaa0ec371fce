//! Built-in pipeline phases.
//!
//! This module provides the standard phases that run in every pipeline:
//!
//! - [`LowerPhase`] - turns the manifest into a class hierarchy
//! - [`DeclarePhase`] - declares the product classes in the code model
//! - [`RegisterPhase`] - declares an empty builder inside every class
//! - [`GeneratePhase`] - fills every builder with its members

mod declare;
mod generate;
mod lower;
mod register;

pub use declare::DeclarePhase;
pub use generate::GeneratePhase;
pub use lower::{LowerPhase, lower_manifest};
pub use register::RegisterPhase;
