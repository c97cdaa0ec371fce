//! Fluent builder generation.
//!
//! Generation runs in two phases over a [`ClassHierarchy`](fluent_model::ClassHierarchy):
//!
//! 1. [`BuilderRegistry::build`] declares an empty builder type inside every
//!    class and records a [`BuilderDescriptor`] for it.
//! 2. [`BuilderGenerator`] fills each builder with its fields, setters,
//!    `init` chain and, for concrete classes, `build()` and `builder()`.
//!
//! Phase 1 finishes for every class before Phase 2 starts, so a generator
//! can always resolve its superclass builder.

pub mod array;
mod generator;
pub mod naming;
mod policy;
mod property;
mod registry;

#[cfg(test)]
mod tests;

pub use generator::{BuilderGenerator, generate_builders};
pub use policy::{DefensiveCopy, DirectAssignment, PolicyKind, PropertyPolicy};
pub use property::Property;
pub use registry::{BuilderConflict, BuilderDescriptor, BuilderRegistry};
