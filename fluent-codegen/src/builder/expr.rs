//! Language-agnostic expressions and statements for method bodies.
//!
//! Builder members only need a small expression language: field access,
//! object creation, method calls (including `super` calls), and the two
//! collection adapters used by immutable products. Each target language's
//! renderer decides the syntax.
//!
//! # Example
//!
//! ```ignore
//! // this.name = name; return this;
//! let body = vec![
//!     Statement::assign(Value::this_field("name"), Value::ident("name")),
//!     Statement::return_(Value::This),
//! ];
//! ```

use super::TypeRef;

/// A semantic expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The null reference.
    Null,
    Bool(bool),
    Int(i64),
    /// String literal (will be quoted).
    String(String),
    /// A parameter or local variable.
    Ident(String),
    /// The current instance.
    This,
    /// Field read on a target (`target.name`).
    Field { target: Box<Value>, name: String },
    /// Instance creation with the no-argument constructor.
    New(TypeRef),
    /// Method call on a target. A call on [`Value::This`] renders without
    /// a receiver.
    Call {
        target: Box<Value>,
        method: String,
        args: Vec<Value>,
    },
    /// Non-virtual call to the superclass implementation.
    SuperCall { method: String, args: Vec<Value> },
    /// A modifiable copy of a list, or null when the list is null.
    CopyList(Box<Value>),
    /// A read-only view of a list, or null when the list is null.
    UnmodifiableList(Box<Value>),
}

impl Value {
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident(name.into())
    }

    pub fn string(v: impl Into<String>) -> Self {
        Self::String(v.into())
    }

    /// Field read on `target`.
    pub fn field(target: Value, name: impl Into<String>) -> Self {
        Self::Field {
            target: Box::new(target),
            name: name.into(),
        }
    }

    /// Field read on `this`.
    pub fn this_field(name: impl Into<String>) -> Self {
        Self::field(Value::This, name)
    }

    pub fn new_instance(ty: TypeRef) -> Self {
        Self::New(ty)
    }

    pub fn call(target: Value, method: impl Into<String>, args: Vec<Value>) -> Self {
        Self::Call {
            target: Box::new(target),
            method: method.into(),
            args,
        }
    }

    /// Call on the current instance.
    pub fn call_self(method: impl Into<String>, args: Vec<Value>) -> Self {
        Self::call(Value::This, method, args)
    }

    pub fn super_call(method: impl Into<String>, args: Vec<Value>) -> Self {
        Self::SuperCall {
            method: method.into(),
            args,
        }
    }

    pub fn copy_list(value: Value) -> Self {
        Self::CopyList(Box::new(value))
    }

    pub fn unmodifiable_list(value: Value) -> Self {
        Self::UnmodifiableList(Box::new(value))
    }

    /// Visit this value and every nested value, outermost first.
    pub fn walk(&self, f: &mut impl FnMut(&Value)) {
        f(self);
        match self {
            Value::Field { target, .. } => target.walk(f),
            Value::Call { target, args, .. } => {
                target.walk(f);
                args.iter().for_each(|a| a.walk(f));
            }
            Value::SuperCall { args, .. } => args.iter().for_each(|a| a.walk(f)),
            Value::CopyList(inner) | Value::UnmodifiableList(inner) => inner.walk(f),
            _ => {}
        }
    }
}

/// A statement in a method body.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Assignment to a field: `target = value;`.
    Assign { target: Value, value: Value },
    /// Return statement.
    Return(Option<Value>),
    /// Expression statement.
    Expr(Value),
}

impl Statement {
    pub fn assign(target: Value, value: Value) -> Self {
        Self::Assign { target, value }
    }

    pub fn return_(value: Value) -> Self {
        Self::Return(Some(value))
    }

    pub fn return_void() -> Self {
        Self::Return(None)
    }

    pub fn expr(value: Value) -> Self {
        Self::Expr(value)
    }

    /// Visit every value in this statement.
    pub fn walk_values(&self, f: &mut impl FnMut(&Value)) {
        match self {
            Statement::Assign { target, value } => {
                target.walk(f);
                value.walk(f);
            }
            Statement::Return(Some(value)) | Statement::Expr(value) => value.walk(f),
            Statement::Return(None) => {}
        }
    }
}
