//! The code model: declared types, their members, and the [`Emitter`]
//! interface the builder generator writes through.

mod model;

use thiserror::Error;

pub use model::{CodeModel, TypeDecl, TypeId};

use crate::builder::{FieldSpec, MethodSpec, TypeRef, TypeSpec};

/// A declaration that collides with an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclarationConflict {
    #[error("type '{name}' is already declared")]
    Type { name: String },

    #[error("'{outer}' already contains nested type '{name}'")]
    NestedType { outer: String, name: String },

    #[error("'{owner}' already declares field '{name}'")]
    Field { owner: String, name: String },

    #[error("'{owner}' already declares method '{signature}'")]
    Method { owner: String, signature: String },
}

/// Declaration requests made by the builder generator.
///
/// The generator never touches the symbol table directly; any host that
/// can answer these requests can receive builders.
pub trait Emitter {
    /// Declare a class nested inside `outer`.
    fn declare_nested_type(
        &mut self,
        outer: TypeId,
        spec: TypeSpec,
    ) -> Result<TypeId, DeclarationConflict>;

    fn declare_field(
        &mut self,
        owner: TypeId,
        field: FieldSpec,
    ) -> Result<(), DeclarationConflict>;

    /// Declare a method. Overloads are allowed; a second method with the
    /// same erased signature is a conflict.
    fn declare_method(
        &mut self,
        owner: TypeId,
        method: MethodSpec,
    ) -> Result<(), DeclarationConflict>;

    /// Make `ty` extend `superclass`.
    fn set_extends(&mut self, ty: TypeId, superclass: TypeId);

    /// Resolve a type by qualified name.
    fn find_type(&self, qualified_name: &str) -> Option<TypeId>;

    /// A type reference usable in member signatures.
    fn type_ref(&self, id: TypeId) -> TypeRef;
}

impl Emitter for CodeModel {
    fn declare_nested_type(
        &mut self,
        outer: TypeId,
        spec: TypeSpec,
    ) -> Result<TypeId, DeclarationConflict> {
        self.add_nested(outer, spec)
    }

    fn declare_field(
        &mut self,
        owner: TypeId,
        field: FieldSpec,
    ) -> Result<(), DeclarationConflict> {
        self.add_field(owner, field)
    }

    fn declare_method(
        &mut self,
        owner: TypeId,
        method: MethodSpec,
    ) -> Result<(), DeclarationConflict> {
        self.add_method(owner, method)
    }

    fn set_extends(&mut self, ty: TypeId, superclass: TypeId) {
        self.get_mut(ty).extends = Some(superclass);
    }

    fn find_type(&self, qualified_name: &str) -> Option<TypeId> {
        self.lookup(qualified_name)
    }

    fn type_ref(&self, id: TypeId) -> TypeRef {
        self.type_ref_of(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emitter_through_trait_object() {
        let mut model = CodeModel::new();
        let leaf = model.declare_class("a.Leaf", TypeSpec::class("Leaf")).unwrap();

        let emitter: &mut dyn Emitter = &mut model;
        let builder = emitter
            .declare_nested_type(leaf, TypeSpec::class("Builder"))
            .unwrap();
        emitter
            .declare_field(builder, FieldSpec::new("id", TypeRef::int()))
            .unwrap();
        assert!(
            emitter
                .declare_field(builder, FieldSpec::new("id", TypeRef::long()))
                .is_err()
        );
        assert_eq!(emitter.find_type("a.Leaf.Builder"), Some(builder));
        assert_eq!(emitter.type_ref(builder), TypeRef::named("a.Leaf.Builder"));
    }

    #[test]
    fn test_conflict_messages() {
        let err = DeclarationConflict::NestedType {
            outer: "a.Leaf".into(),
            name: "Builder".into(),
        };
        assert_eq!(err.to_string(), "'a.Leaf' already contains nested type 'Builder'");
    }
}
