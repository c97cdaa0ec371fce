//! Field type definitions.

use serde::Serialize;

/// Primitive value types a field can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    /// Text (Java: `String`).
    String,
    /// 32-bit integer (Java: `int`).
    Int,
    /// 64-bit integer (Java: `long`).
    Long,
    /// Single precision float (Java: `float`).
    Float,
    /// Double precision float (Java: `double`).
    Double,
    /// Boolean (Java: `boolean`).
    Bool,
    /// Single character (Java: `char`).
    Char,
    /// Single byte (Java: `byte`).
    Byte,
}

impl PrimitiveType {
    /// All primitive types, in declaration order.
    pub const ALL: [PrimitiveType; 8] = [
        Self::String,
        Self::Int,
        Self::Long,
        Self::Float,
        Self::Double,
        Self::Bool,
        Self::Char,
        Self::Byte,
    ];

    /// Get the canonical schema name of this primitive.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Bool => "bool",
            Self::Char => "char",
            Self::Byte => "byte",
        }
    }

    /// Look up a primitive by its schema name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == name)
    }
}

/// The element type of a field.
///
/// For array and list fields this is the type of one element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    /// A primitive value.
    Primitive(PrimitiveType),
    /// A named (class) type, fully qualified.
    Named(String),
}

impl ElementType {
    /// Create a named element type.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Convenience: string element.
    pub fn string() -> Self {
        Self::Primitive(PrimitiveType::String)
    }

    /// Convenience: int element.
    pub fn int() -> Self {
        Self::Primitive(PrimitiveType::Int)
    }

    /// Convenience: long element.
    pub fn long() -> Self {
        Self::Primitive(PrimitiveType::Long)
    }

    /// Convenience: bool element.
    pub fn bool() -> Self {
        Self::Primitive(PrimitiveType::Bool)
    }

    /// Convenience: double element.
    pub fn double() -> Self {
        Self::Primitive(PrimitiveType::Double)
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementType::Primitive(p) => f.write_str(p.as_str()),
            ElementType::Named(name) => f.write_str(name),
        }
    }
}

/// How many values a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cardinality {
    /// Exactly one value.
    #[default]
    Single,
    /// A fixed array of values, set wholesale.
    Array,
    /// A growable list of values.
    List,
}

impl Cardinality {
    /// Returns true for array-valued fields.
    pub fn is_array(&self) -> bool {
        matches!(self, Cardinality::Array)
    }

    /// Returns true for list-valued fields.
    pub fn is_list(&self) -> bool {
        matches!(self, Cardinality::List)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_names_round_trip() {
        for p in PrimitiveType::ALL {
            assert_eq!(PrimitiveType::from_name(p.as_str()), Some(p));
        }
        assert_eq!(PrimitiveType::from_name("integer"), None);
    }

    #[test]
    fn test_element_type_display() {
        assert_eq!(ElementType::int().to_string(), "int");
        assert_eq!(
            ElementType::named("com.acme.Address").to_string(),
            "com.acme.Address"
        );
    }

    #[test]
    fn test_cardinality() {
        assert!(Cardinality::Array.is_array());
        assert!(!Cardinality::List.is_array());
        assert!(Cardinality::List.is_list());
        assert_eq!(Cardinality::default(), Cardinality::Single);
    }
}
