//! Manifest types and parsing for fluent.toml files.

mod class;
mod file;
mod generator;
mod parse;
mod validate;

pub use class::{ClassEntry, FieldEntry, TypeExpr};
pub use file::FluentToml;
pub use generator::{DEFAULT_BUILDER_NAME, GeneratorSection, Policy};
pub use parse::parse_manifest;
use serde::Deserialize;
pub use validate::ParseContext;

/// Root manifest for fluent.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Generator settings
    #[serde(default)]
    pub generator: GeneratorSection,

    /// Data classes, in declaration order
    #[serde(default, rename = "class")]
    pub classes: Vec<ClassEntry>,
}

impl Manifest {
    /// Qualify a class name with the configured package.
    ///
    /// Names that already contain a `.` are taken as qualified.
    pub fn qualify(&self, name: &str) -> String {
        match &self.generator.package {
            Some(pkg) if !name.contains('.') && !pkg.is_empty() => format!("{pkg}.{name}"),
            _ => name.to_string(),
        }
    }

    /// Find a class by its declared or qualified name.
    pub fn find_class(&self, name: &str) -> Option<&ClassEntry> {
        let qualified = self.qualify(name);
        self.classes
            .iter()
            .find(|c| self.qualify(c.name.get_ref()) == qualified)
    }

    /// Check if a class exists.
    pub fn has_class(&self, name: &str) -> bool {
        self.find_class(name).is_some()
    }
}
