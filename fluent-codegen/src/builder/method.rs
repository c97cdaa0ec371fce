//! Language-agnostic method definitions.

use super::{
    expr::Statement,
    types::{TypeRef, Visibility},
};

/// Name of the implicit upper bound of an unbounded type variable.
pub const OBJECT_TYPE: &str = "java.lang.Object";

/// A declarative specification for a method.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSpec {
    pub name: String,
    pub doc: Option<String>,
    pub params: Vec<ParamSpec>,
    /// Return type (None for void).
    pub return_type: Option<TypeRef>,
    pub body: Vec<Statement>,
    pub visibility: Visibility,
    /// Method type parameters.
    pub generics: Vec<GenericParam>,
    /// Static methods have no receiver.
    pub is_static: bool,
    /// Annotation names without the `@` (e.g. `Override`).
    pub annotations: Vec<String>,
}

impl MethodSpec {
    /// Create a new public instance method spec.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
            visibility: Visibility::Public,
            generics: Vec::new(),
            is_static: false,
            annotations: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: TypeRef) -> Self {
        self.return_type = Some(ty);
        self
    }

    pub fn statement(mut self, stmt: Statement) -> Self {
        self.body.push(stmt);
        self
    }

    pub fn statements(mut self, stmts: impl IntoIterator<Item = Statement>) -> Self {
        self.body.extend(stmts);
        self
    }

    pub fn visibility(mut self, vis: Visibility) -> Self {
        self.visibility = vis;
        self
    }

    pub fn protected(self) -> Self {
        self.visibility(Visibility::Protected)
    }

    pub fn generic(mut self, param: GenericParam) -> Self {
        self.generics.push(param);
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn annotate(mut self, annotation: impl Into<String>) -> Self {
        self.annotations.push(annotation.into());
        self
    }

    /// Whether the method carries `@Override`.
    pub fn is_override(&self) -> bool {
        self.annotations.iter().any(|a| a == "Override")
    }

    /// Whether the last parameter takes a variable number of arguments.
    pub fn is_variadic(&self) -> bool {
        self.params.last().is_some_and(|p| p.variadic)
    }

    /// Look up a method type parameter by name.
    pub fn type_param(&self, name: &str) -> Option<&GenericParam> {
        self.generics.iter().find(|g| g.name == name)
    }

    /// Replace method type variables with their erasure.
    pub fn erase(&self, ty: &TypeRef) -> TypeRef {
        match ty {
            TypeRef::TypeVar(name) => match self.type_param(name) {
                Some(param) => param.erasure(),
                None => ty.clone(),
            },
            TypeRef::Array(inner) => TypeRef::array(self.erase(inner)),
            TypeRef::List(inner) => TypeRef::list(self.erase(inner)),
            other => other.clone(),
        }
    }

    /// Erased parameter types; two methods with the same name and erased
    /// parameters have the same signature.
    pub fn erased_params(&self) -> Vec<TypeRef> {
        self.params.iter().map(|p| self.erase(&p.ty)).collect()
    }

    /// Human-readable signature (`withTags(string[])`).
    pub fn signature(&self) -> String {
        let params: Vec<_> = self
            .erased_params()
            .iter()
            .map(ToString::to_string)
            .collect();
        format!("{}({})", self.name, params.join(", "))
    }
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    pub name: String,
    /// Parameter type. A variadic parameter has an array type.
    pub ty: TypeRef,
    /// Whether this parameter is variadic (Java: `T... name`).
    pub variadic: bool,
    pub is_final: bool,
}

impl ParamSpec {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            variadic: false,
            is_final: true,
        }
    }

    /// A variadic parameter taking zero or more `element` values.
    pub fn variadic(name: impl Into<String>, element: TypeRef) -> Self {
        Self {
            variadic: true,
            ..Self::new(name, TypeRef::array(element))
        }
    }

    pub fn non_final(mut self) -> Self {
        self.is_final = false;
        self
    }
}

/// A method type parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericParam {
    /// Parameter name (e.g., "P").
    pub name: String,
    /// Upper bounds (Java `extends`).
    pub bounds: Vec<TypeRef>,
}

impl GenericParam {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bounds: Vec::new(),
        }
    }

    pub fn bound(mut self, bound: TypeRef) -> Self {
        self.bounds.push(bound);
        self
    }

    /// The type this parameter erases to: its first bound, or Object.
    pub fn erasure(&self) -> TypeRef {
        self.bounds
            .first()
            .cloned()
            .unwrap_or_else(|| TypeRef::named(OBJECT_TYPE))
    }
}
