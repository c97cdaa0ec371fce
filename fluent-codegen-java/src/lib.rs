//! Java rendering for generated fluent builders.
//!
//! Turns the code model left by the pipeline into `.java` sources, one file
//! per top-level type under its package directory.

mod generator;
mod naming;
mod render;
mod type_mapper;

pub use fluent_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use generator::Generator;
pub use naming::JAVA_NAMING;
pub use render::JavaFile;
pub use type_mapper::JavaTypeMapper;
