//! Type and field declarations.

use super::{
    Value,
    types::{TypeRef, Visibility},
};

/// Header of a declared class: everything except its members.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeSpec {
    /// Simple name (`Builder`, `Leaf`).
    pub name: String,
    pub doc: Option<String>,
    pub visibility: Visibility,
    /// Static nested class (no enclosing instance).
    pub is_static: bool,
    pub is_abstract: bool,
}

impl TypeSpec {
    /// A public, non-static, concrete class.
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            visibility: Visibility::Public,
            is_static: false,
            is_abstract: false,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn visibility(mut self, vis: Visibility) -> Self {
        self.visibility = vis;
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn abstract_(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }
}

/// A field declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub ty: TypeRef,
    pub doc: Option<String>,
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_final: bool,
    /// Explicit initial value; languages apply their default otherwise.
    pub initializer: Option<Value>,
}

impl FieldSpec {
    /// A private instance field.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            doc: None,
            visibility: Visibility::Private,
            is_static: false,
            is_final: false,
            initializer: None,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn visibility(mut self, vis: Visibility) -> Self {
        self.visibility = vis;
        self
    }

    pub fn protected(self) -> Self {
        self.visibility(Visibility::Protected)
    }

    pub fn static_(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn final_(mut self) -> Self {
        self.is_final = true;
        self
    }

    pub fn initializer(mut self, value: Value) -> Self {
        self.initializer = Some(value);
        self
    }
}
