//! Language-agnostic type references for emitted declarations.
//!
//! Types are kept semantic and rendered per target language through the
//! [`TypeMapper`] trait.

use fluent_model::{Cardinality, ElementType};
pub use fluent_model::PrimitiveType;

/// A type reference in an emitted declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// A primitive type (string, int, bool, etc.).
    Primitive(PrimitiveType),
    /// A fixed array (Java: `T[]`).
    Array(Box<TypeRef>),
    /// A growable list (Java: `java.util.List<T>`).
    List(Box<TypeRef>),
    /// A named class, fully qualified. Nested types use `.` after the outer
    /// type (`com.acme.Leaf.Builder`).
    Named(String),
    /// A method type variable (`P`).
    TypeVar(String),
    /// No value (Java: `void`).
    Unit,
}

impl TypeRef {
    pub fn primitive(ty: PrimitiveType) -> Self {
        Self::Primitive(ty)
    }

    pub fn array(inner: TypeRef) -> Self {
        Self::Array(Box::new(inner))
    }

    pub fn list(inner: TypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn type_var(name: impl Into<String>) -> Self {
        Self::TypeVar(name.into())
    }

    pub fn unit() -> Self {
        Self::Unit
    }

    pub fn string() -> Self {
        Self::Primitive(PrimitiveType::String)
    }

    pub fn int() -> Self {
        Self::Primitive(PrimitiveType::Int)
    }

    pub fn long() -> Self {
        Self::Primitive(PrimitiveType::Long)
    }

    pub fn bool() -> Self {
        Self::Primitive(PrimitiveType::Bool)
    }

    /// Type of one element of a model field.
    pub fn from_element(ty: &ElementType) -> Self {
        match ty {
            ElementType::Primitive(p) => Self::Primitive(*p),
            ElementType::Named(name) => Self::Named(name.clone()),
        }
    }

    /// Full type of a model field with the given cardinality.
    pub fn from_field(ty: &ElementType, cardinality: Cardinality) -> Self {
        let element = Self::from_element(ty);
        match cardinality {
            Cardinality::Single => element,
            Cardinality::Array => Self::array(element),
            Cardinality::List => Self::list(element),
        }
    }

    /// Element type for arrays and lists.
    pub fn element_type(&self) -> Option<&TypeRef> {
        match self {
            Self::Array(inner) | Self::List(inner) => Some(inner),
            _ => None,
        }
    }

    /// Whether values of this type can be `null`.
    ///
    /// Strings count as references, as in Java.
    pub fn is_reference(&self) -> bool {
        match self {
            Self::Primitive(p) => *p == PrimitiveType::String,
            Self::Unit => false,
            _ => true,
        }
    }

    /// Qualified name of a named type.
    pub fn as_named(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            _ => None,
        }
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeRef::Primitive(p) => f.write_str(p.as_str()),
            TypeRef::Array(inner) => write!(f, "{}[]", inner),
            TypeRef::List(inner) => write!(f, "list<{}>", inner),
            TypeRef::Named(name) | TypeRef::TypeVar(name) => f.write_str(name),
            TypeRef::Unit => f.write_str("void"),
        }
    }
}

/// Access level for types and members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    /// Visible to subclasses (and, in Java, the package).
    Protected,
    /// Package-private (no modifier).
    Package,
    Private,
}

impl Visibility {
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Public)
    }

    /// Whether a subclass can see a member with this visibility.
    pub fn is_inherited(&self) -> bool {
        matches!(self, Self::Public | Self::Protected)
    }
}

/// Trait for mapping types to language-specific representations.
///
/// Implement this trait to support a new target language's type system.
pub trait TypeMapper {
    /// Map a primitive type to the target language.
    fn map_primitive(&self, ty: PrimitiveType) -> String;

    /// Map an array type from its rendered element.
    fn map_array(&self, inner: &str) -> String;

    /// Map a list type. Receives the unrendered element so languages that
    /// box primitives in collections can do so.
    fn map_list(&self, inner: &TypeRef) -> String;

    /// Map a named type (e.g. to drop a package prefix).
    fn map_named(&self, name: &str) -> String {
        name.to_string()
    }

    /// Map the unit type.
    fn map_unit(&self) -> String;

    /// Render a complete TypeRef to a string.
    fn render_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Primitive(p) => self.map_primitive(*p),
            TypeRef::Array(inner) => {
                let inner_str = self.render_type(inner);
                self.map_array(&inner_str)
            }
            TypeRef::List(inner) => self.map_list(inner),
            TypeRef::Named(name) => self.map_named(name),
            TypeRef::TypeVar(name) => name.clone(),
            TypeRef::Unit => self.map_unit(),
        }
    }
}
