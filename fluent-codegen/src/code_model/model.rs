//! Arena of declared types.

use indexmap::IndexMap;

use super::DeclarationConflict;
use crate::builder::{FieldSpec, MethodSpec, TypeRef, TypeSpec};

/// Index of a type inside a [`CodeModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub usize);

/// A declared class with its members.
#[derive(Debug, Clone)]
pub struct TypeDecl {
    pub spec: TypeSpec,
    /// Fully qualified name; nested types append `.Name` to their outer type.
    pub qualified_name: String,
    /// Package of the top-level type that (transitively) contains this one.
    pub package: Option<String>,
    /// Enclosing type for nested declarations.
    pub outer: Option<TypeId>,
    /// Superclass.
    pub extends: Option<TypeId>,
    pub fields: Vec<FieldSpec>,
    pub methods: Vec<MethodSpec>,
    /// Nested types by simple name, in declaration order.
    pub nested: IndexMap<String, TypeId>,
}

impl TypeDecl {
    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Methods with the given name, in declaration order.
    pub fn methods_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a MethodSpec> {
        self.methods.iter().filter(move |m| m.name == name)
    }

    pub fn is_top_level(&self) -> bool {
        self.outer.is_none()
    }
}

/// The symbol table the generator emits into.
///
/// Types are stored in an arena and addressed by [`TypeId`]; lookup by
/// qualified name covers nested types too.
#[derive(Debug, Clone, Default)]
pub struct CodeModel {
    types: Vec<TypeDecl>,
    by_name: IndexMap<String, TypeId>,
}

impl CodeModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a top-level class under its qualified name.
    pub fn declare_class(
        &mut self,
        qualified_name: &str,
        spec: TypeSpec,
    ) -> Result<TypeId, DeclarationConflict> {
        if self.by_name.contains_key(qualified_name) {
            return Err(DeclarationConflict::Type {
                name: qualified_name.to_string(),
            });
        }
        let package = qualified_name
            .rsplit_once('.')
            .map(|(pkg, _)| pkg.to_string());
        Ok(self.insert(TypeDecl {
            spec,
            qualified_name: qualified_name.to_string(),
            package,
            outer: None,
            extends: None,
            fields: Vec::new(),
            methods: Vec::new(),
            nested: IndexMap::new(),
        }))
    }

    /// Declare a class nested inside `outer`.
    pub(crate) fn add_nested(
        &mut self,
        outer: TypeId,
        spec: TypeSpec,
    ) -> Result<TypeId, DeclarationConflict> {
        let parent = self.get(outer);
        if parent.nested.contains_key(&spec.name) {
            return Err(DeclarationConflict::NestedType {
                outer: parent.qualified_name.clone(),
                name: spec.name,
            });
        }
        let qualified_name = format!("{}.{}", parent.qualified_name, spec.name);
        let package = parent.package.clone();
        let simple = spec.name.clone();
        let id = self.insert(TypeDecl {
            spec,
            qualified_name,
            package,
            outer: Some(outer),
            extends: None,
            fields: Vec::new(),
            methods: Vec::new(),
            nested: IndexMap::new(),
        });
        self.get_mut(outer).nested.insert(simple, id);
        Ok(id)
    }

    pub(crate) fn add_field(
        &mut self,
        owner: TypeId,
        field: FieldSpec,
    ) -> Result<(), DeclarationConflict> {
        let decl = self.get_mut(owner);
        if decl.field(&field.name).is_some() {
            return Err(DeclarationConflict::Field {
                owner: decl.qualified_name.clone(),
                name: field.name,
            });
        }
        decl.fields.push(field);
        Ok(())
    }

    pub(crate) fn add_method(
        &mut self,
        owner: TypeId,
        method: MethodSpec,
    ) -> Result<(), DeclarationConflict> {
        let decl = self.get_mut(owner);
        let erased = method.erased_params();
        if decl
            .methods_named(&method.name)
            .any(|m| m.erased_params() == erased)
        {
            return Err(DeclarationConflict::Method {
                owner: decl.qualified_name.clone(),
                signature: method.signature(),
            });
        }
        decl.methods.push(method);
        Ok(())
    }

    /// Get a type by id.
    ///
    /// Ids are only handed out by this model, so indexing cannot fail for
    /// ids obtained from it.
    pub fn get(&self, id: TypeId) -> &TypeDecl {
        &self.types[id.0]
    }

    pub(crate) fn get_mut(&mut self, id: TypeId) -> &mut TypeDecl {
        &mut self.types[id.0]
    }

    /// Look up a type by qualified name.
    pub fn lookup(&self, qualified_name: &str) -> Option<TypeId> {
        self.by_name.get(qualified_name).copied()
    }

    /// A named type reference to a declared type.
    pub fn type_ref_of(&self, id: TypeId) -> TypeRef {
        TypeRef::named(&self.get(id).qualified_name)
    }

    /// The superclass chain of `id`, starting with `id` itself.
    pub fn supertypes(&self, id: TypeId) -> impl Iterator<Item = TypeId> + '_ {
        let mut next = Some(id);
        let mut remaining = self.types.len();
        std::iter::from_fn(move || {
            let current = next?;
            if remaining == 0 {
                return None;
            }
            remaining -= 1;
            next = self.get(current).extends;
            Some(current)
        })
    }

    /// Whether `sub` is `sup` or one of its subclasses.
    pub fn is_subtype(&self, sub: TypeId, sup: TypeId) -> bool {
        self.supertypes(sub).any(|t| t == sup)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &TypeDecl)> {
        self.types.iter().enumerate().map(|(i, t)| (TypeId(i), t))
    }

    /// Top-level types in declaration order.
    pub fn top_level(&self) -> impl Iterator<Item = (TypeId, &TypeDecl)> {
        self.iter().filter(|(_, t)| t.is_top_level())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    fn insert(&mut self, decl: TypeDecl) -> TypeId {
        let id = TypeId(self.types.len());
        self.by_name.insert(decl.qualified_name.clone(), id);
        self.types.push(decl);
        id
    }
}
