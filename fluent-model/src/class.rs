//! Class and field definitions.

use serde::Serialize;

use crate::{Cardinality, ClassId, ElementType, SourceLocation};

/// A data class for which a builder may be generated.
#[derive(Debug, Clone, Serialize)]
pub struct ClassModel {
    /// Fully qualified name (e.g. `com.acme.Leaf`).
    pub name: String,
    /// Direct superclass, if any.
    pub superclass: Option<ClassId>,
    pub is_abstract: bool,
    /// Own declared fields, in declaration order. Inherited fields are not repeated.
    pub fields: Vec<FieldModel>,
    pub location: Option<SourceLocation>,
    pub doc: Option<String>,
    /// Nested types the host already declared inside this class.
    pub nested: Vec<String>,
}

impl ClassModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            superclass: None,
            is_abstract: false,
            fields: Vec::new(),
            location: None,
            doc: None,
            nested: Vec::new(),
        }
    }

    pub fn extends(mut self, superclass: ClassId) -> Self {
        self.superclass = Some(superclass);
        self
    }

    pub fn abstract_(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn field(mut self, field: FieldModel) -> Self {
        self.fields.push(field);
        self
    }

    pub fn at(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn nested(mut self, name: impl Into<String>) -> Self {
        self.nested.push(name.into());
        self
    }

    /// The unqualified class name (`Leaf` for `com.acme.Leaf`).
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    /// The package part of the qualified name, if any.
    pub fn package(&self) -> Option<&str> {
        self.name.rsplit_once('.').map(|(pkg, _)| pkg)
    }

    /// Own fields that become builder properties.
    pub fn instance_fields(&self) -> impl Iterator<Item = &FieldModel> {
        self.fields.iter().filter(|f| f.is_instance())
    }
}

/// A field declared on a class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldModel {
    pub name: String,
    /// Element type; for arrays and lists the type of one element.
    pub ty: ElementType,
    pub cardinality: Cardinality,
    pub is_static: bool,
    pub doc: Option<String>,
}

impl FieldModel {
    pub fn new(name: impl Into<String>, ty: ElementType) -> Self {
        Self {
            name: name.into(),
            ty,
            cardinality: Cardinality::Single,
            is_static: false,
            doc: None,
        }
    }

    /// An array-valued field.
    pub fn array(name: impl Into<String>, ty: ElementType) -> Self {
        Self::new(name, ty).cardinality(Cardinality::Array)
    }

    /// A list-valued field.
    pub fn list(name: impl Into<String>, ty: ElementType) -> Self {
        Self::new(name, ty).cardinality(Cardinality::List)
    }

    pub fn cardinality(mut self, cardinality: Cardinality) -> Self {
        self.cardinality = cardinality;
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Whether this field is a builder property.
    pub fn is_instance(&self) -> bool {
        !self.is_static
    }
}

/// The field name with its first character upper-cased, as it appears in
/// accessor names (`firstName` -> `FirstName`, `line_2` -> `Line_2`).
///
/// Two instance fields visible from one class must not share a stem, or
/// their setters would collide.
pub fn property_stem(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
