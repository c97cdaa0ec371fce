//! `[[class]]` and `[[class.field]]` entries.

use fluent_model::{Cardinality, SourceLocation};
use serde::Deserialize;
use toml::Spanned;

/// A `[[class]]` entry
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassEntry {
    /// Class name, simple or qualified
    pub name: Spanned<String>,

    /// Abstract classes get no `build()` or `builder()`
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,

    /// Documentation
    pub doc: Option<String>,

    /// Superclass name
    pub extends: Option<Spanned<String>>,

    /// Nested types the class already declares
    #[serde(default)]
    pub nested: Vec<String>,

    /// Own fields
    #[serde(default, rename = "field")]
    pub fields: Vec<FieldEntry>,

    /// Where the class name appears in the manifest, filled in after parsing
    #[serde(skip)]
    pub location: Option<SourceLocation>,
}

impl ClassEntry {
    pub fn name(&self) -> &str {
        self.name.get_ref()
    }

    pub fn extends(&self) -> Option<&str> {
        self.extends.as_ref().map(|e| e.get_ref().as_str())
    }
}

/// A `[[class.field]]` entry
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldEntry {
    pub name: Spanned<String>,

    /// Type expression (`int`, `Address`, `string[]`, `list<int>`)
    #[serde(rename = "type")]
    pub ty: Spanned<String>,

    #[serde(default, rename = "static")]
    pub is_static: bool,

    pub doc: Option<String>,
}

impl FieldEntry {
    pub fn name(&self) -> &str {
        self.name.get_ref()
    }

    /// Parse the type expression.
    pub fn type_expr(&self) -> Option<TypeExpr<'_>> {
        TypeExpr::parse(self.ty.get_ref())
    }
}

/// A parsed field type: element name plus cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeExpr<'a> {
    pub element: &'a str,
    pub cardinality: Cardinality,
}

impl<'a> TypeExpr<'a> {
    /// Parse `T`, `T[]` or `list<T>`. Nested containers are rejected.
    pub fn parse(raw: &'a str) -> Option<Self> {
        let raw = raw.trim();
        let (element, cardinality) = if let Some(inner) = raw.strip_suffix("[]") {
            (inner.trim(), Cardinality::Array)
        } else if let Some(inner) = raw
            .strip_prefix("list<")
            .and_then(|rest| rest.strip_suffix('>'))
        {
            (inner.trim(), Cardinality::List)
        } else {
            (raw, Cardinality::Single)
        };

        if element.is_empty() || element.contains(['[', ']', '<', '>', ' ']) {
            return None;
        }
        Some(Self {
            element,
            cardinality,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single() {
        let ty = TypeExpr::parse("string").unwrap();
        assert_eq!(ty.element, "string");
        assert_eq!(ty.cardinality, Cardinality::Single);
    }

    #[test]
    fn test_parse_array() {
        let ty = TypeExpr::parse("Address[]").unwrap();
        assert_eq!(ty.element, "Address");
        assert_eq!(ty.cardinality, Cardinality::Array);
    }

    #[test]
    fn test_parse_list() {
        let ty = TypeExpr::parse("list< int >").unwrap();
        assert_eq!(ty.element, "int");
        assert_eq!(ty.cardinality, Cardinality::List);
    }

    #[test]
    fn test_parse_rejects_nested() {
        assert!(TypeExpr::parse("int[][]").is_none());
        assert!(TypeExpr::parse("list<int[]>").is_none());
        assert!(TypeExpr::parse("list<>").is_none());
        assert!(TypeExpr::parse("").is_none());
    }
}
