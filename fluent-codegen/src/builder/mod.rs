//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - indented text buffer
//! - [`CodeFragment`] / [`Renderable`] - intermediate representation for code pieces
//! - [`Indent`] - indentation configuration
//!
//! # Declarative Specifications
//!
//! - [`TypeSpec`], [`FieldSpec`], [`MethodSpec`] - what the code model stores
//! - [`Value`], [`Statement`] - method bodies
//! - [`TypeRef`] - language-agnostic type references
//! - [`TypeMapper`] - trait for language-specific type rendering

mod code_builder;
mod expr;
mod indent;
mod method;
mod renderable;
mod structure;
mod types;

pub use code_builder::CodeBuilder;
pub use expr::{Statement, Value};
pub use indent::Indent;
pub use method::{GenericParam, MethodSpec, OBJECT_TYPE, ParamSpec};
pub use renderable::{CodeFragment, Renderable};
pub use structure::{FieldSpec, TypeSpec};
pub use types::{PrimitiveType, TypeMapper, TypeRef, Visibility};
