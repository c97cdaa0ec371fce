use fluent_model::{Cardinality, FieldModel};

use super::naming::setter_name;
use crate::builder::TypeRef;

/// A builder property derived from a non-static field.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Field name, shared by the product field and the builder field.
    pub name: String,
    /// Setter method name (`withName`).
    pub setter: String,
    /// Full property type (`String[]` for an array of strings).
    pub ty: TypeRef,
    pub cardinality: Cardinality,
    pub doc: Option<String>,
}

impl Property {
    pub fn from_field(field: &FieldModel) -> Self {
        Self {
            name: field.name.clone(),
            setter: setter_name(&field.name),
            ty: TypeRef::from_field(&field.ty, field.cardinality),
            cardinality: field.cardinality,
            doc: field.doc.clone(),
        }
    }

    /// Element type of array and list properties.
    pub fn element(&self) -> Option<&TypeRef> {
        self.ty.element_type()
    }

    pub fn is_array(&self) -> bool {
        self.cardinality.is_array()
    }

    pub fn is_list(&self) -> bool {
        self.cardinality.is_list()
    }

    /// Doc comment for this property's setter.
    pub fn setter_doc(&self) -> String {
        match &self.doc {
            Some(doc) => format!("Sets {{@code {}}}: {}", self.name, doc),
            None => format!("Sets {{@code {}}}.", self.name),
        }
    }
}
