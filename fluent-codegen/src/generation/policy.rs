//! How builder properties hand their values to the product.
//!
//! The generator asks a [`PropertyPolicy`] for the builder field, setter and
//! init statement of every scalar or list property. Array properties take
//! the varargs path instead and never reach the policy.

use super::Property;
use crate::builder::{FieldSpec, MethodSpec, ParamSpec, Statement, TypeRef, Value};

/// Strategy producing the members for one builder property.
pub trait PropertyPolicy: Send + Sync {
    /// Policy name, for logs.
    fn name(&self) -> &'static str;

    /// The field holding the property value on the builder.
    fn builder_field(&self, property: &Property) -> FieldSpec {
        FieldSpec::new(&property.name, property.ty.clone()).protected()
    }

    /// The fluent setter, returning `builder`.
    fn setter(&self, property: &Property, builder: &TypeRef) -> MethodSpec;

    /// The statement in `init` that moves the builder value onto `product`.
    fn init_statement(&self, property: &Property, product: &Value) -> Statement;
}

/// Setter storing `value` into the builder field and returning `this`.
fn setter_storing(property: &Property, builder: &TypeRef, value: Value) -> MethodSpec {
    MethodSpec::new(&property.setter)
        .doc(property.setter_doc())
        .param(ParamSpec::new(&property.name, property.ty.clone()))
        .returns(builder.clone())
        .statement(Statement::assign(Value::this_field(&property.name), value))
        .statement(Statement::return_(Value::This))
}

/// Plain reference assignment, for mutable products.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectAssignment;

impl PropertyPolicy for DirectAssignment {
    fn name(&self) -> &'static str {
        "direct-assignment"
    }

    fn setter(&self, property: &Property, builder: &TypeRef) -> MethodSpec {
        setter_storing(property, builder, Value::ident(&property.name))
    }

    fn init_statement(&self, property: &Property, product: &Value) -> Statement {
        Statement::assign(
            Value::field(product.clone(), &property.name),
            Value::this_field(&property.name),
        )
    }
}

/// Copy-in, read-only-out handling of lists, for immutable products.
///
/// A list passed to the setter is copied so later changes by the caller do
/// not reach the product; the product receives a read-only view. Scalars
/// are immutable values and are assigned directly. Null stays null.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefensiveCopy;

impl PropertyPolicy for DefensiveCopy {
    fn name(&self) -> &'static str {
        "defensive-copy"
    }

    fn setter(&self, property: &Property, builder: &TypeRef) -> MethodSpec {
        let value = Value::ident(&property.name);
        let value = if property.is_list() {
            Value::copy_list(value)
        } else {
            value
        };
        setter_storing(property, builder, value)
    }

    fn init_statement(&self, property: &Property, product: &Value) -> Statement {
        let value = Value::this_field(&property.name);
        let value = if property.is_list() {
            Value::unmodifiable_list(value)
        } else {
            value
        };
        Statement::assign(Value::field(product.clone(), &property.name), value)
    }
}

/// Which policy a run uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PolicyKind {
    #[default]
    Mutable,
    Immutable,
}

static DIRECT_ASSIGNMENT: DirectAssignment = DirectAssignment;
static DEFENSIVE_COPY: DefensiveCopy = DefensiveCopy;

impl PolicyKind {
    pub fn policy(&self) -> &'static dyn PropertyPolicy {
        match self {
            PolicyKind::Mutable => &DIRECT_ASSIGNMENT,
            PolicyKind::Immutable => &DEFENSIVE_COPY,
        }
    }
}

impl From<fluent_manifest::Policy> for PolicyKind {
    fn from(policy: fluent_manifest::Policy) -> Self {
        match policy {
            fluent_manifest::Policy::Mutable => PolicyKind::Mutable,
            fluent_manifest::Policy::Immutable => PolicyKind::Immutable,
        }
    }
}
