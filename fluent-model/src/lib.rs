//! Class hierarchy model for the fluent builder generator.
//!
//! This crate holds the structural description of the data classes a
//! builder is generated for. It is produced upstream (from a schema) and
//! consumed read-only by the generator.
//!
//! # Architecture
//!
//! ```text
//! fluent.toml → fluent-manifest (parsing) → fluent-model (hierarchy) → codegen
//! ```
//!
//! Classes live in an arena ([`ClassHierarchy`]) and refer to their
//! superclass by [`ClassId`], so several classes can share one superclass
//! without owning it.

mod class;
mod hierarchy;
mod location;
mod types;

pub use class::{ClassModel, FieldModel, property_stem};
pub use hierarchy::{Ancestors, ClassHierarchy, ClassId};
pub use location::SourceLocation;
pub use types::{Cardinality, ElementType, PrimitiveType};
