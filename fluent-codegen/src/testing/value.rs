//! Runtime values of the interpreter.

use std::{cell::RefCell, fmt, rc::Rc};

use indexmap::IndexMap;

use super::InterpError;
use crate::{builder::TypeRef, code_model::TypeId};

/// A runtime value.
#[derive(Debug, Clone)]
pub enum RtValue {
    Null,
    Int(i64),
    Float(f64),
    Bool(bool),
    Char(char),
    Str(Rc<str>),
    Object(Rc<Instance>),
    Array(Rc<Vec<RtValue>>),
    List(ListRef),
}

/// A list shared by reference. Read-only views share the items of the list
/// they wrap.
#[derive(Debug, Clone)]
pub struct ListRef {
    items: Rc<RefCell<Vec<RtValue>>>,
    read_only: bool,
}

impl ListRef {
    pub fn new(items: Vec<RtValue>) -> Self {
        Self {
            items: Rc::new(RefCell::new(items)),
            read_only: false,
        }
    }

    /// A modifiable copy with its own storage.
    pub fn copy(&self) -> Self {
        Self::new(self.items.borrow().clone())
    }

    /// A read-only view over the same storage.
    pub fn read_only_view(&self) -> Self {
        Self {
            items: Rc::clone(&self.items),
            read_only: true,
        }
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn items(&self) -> Vec<RtValue> {
        self.items.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    pub fn push(&self, value: RtValue) -> Result<(), InterpError> {
        if self.read_only {
            return Err(InterpError::ReadOnlyList);
        }
        self.items.borrow_mut().push(value);
        Ok(())
    }

    /// Whether both refer to the same storage.
    pub fn shares_storage(&self, other: &ListRef) -> bool {
        Rc::ptr_eq(&self.items, &other.items)
    }
}

/// An object: its runtime class and one slot per declared field, keyed by
/// the declaring type so hidden fields stay apart.
#[derive(Debug)]
pub struct Instance {
    pub class: TypeId,
    pub(super) fields: RefCell<IndexMap<(TypeId, String), RtValue>>,
}

impl Instance {
    pub(super) fn new(class: TypeId) -> Self {
        Self {
            class,
            fields: RefCell::new(IndexMap::new()),
        }
    }
}

impl RtValue {
    pub fn str(value: &str) -> Self {
        Self::Str(Rc::from(value))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(v) => Some(&**v),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Rc<Instance>> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[RtValue]> {
        match self {
            Self::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&ListRef> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    /// String elements of an array or list; `None` for anything else.
    pub fn strings(&self) -> Option<Vec<String>> {
        let items = match self {
            Self::Array(items) => items.to_vec(),
            Self::List(list) => list.items(),
            _ => return None,
        };
        items
            .iter()
            .map(|v| v.as_str().map(str::to_string))
            .collect()
    }

    /// Reference identity for objects, arrays and lists; value equality for
    /// everything else.
    pub fn same(&self, other: &RtValue) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Char(a), Self::Char(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => Rc::ptr_eq(a, b),
            (Self::Array(a), Self::Array(b)) => Rc::ptr_eq(a, b),
            (Self::List(a), Self::List(b)) => a.shares_storage(b) && a.read_only == b.read_only,
            _ => false,
        }
    }
}

impl fmt::Display for RtValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Int(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Bool(v) => write!(f, "{}", v),
            Self::Char(v) => write!(f, "'{}'", v),
            Self::Str(v) => write!(f, "{:?}", v),
            Self::Object(obj) => write!(f, "<object #{}>", obj.class.0),
            Self::Array(items) => write!(f, "<array of {}>", items.len()),
            Self::List(list) => write!(f, "<list of {}>", list.len()),
        }
    }
}

/// A value together with its static type. `ty` is `None` for the null
/// literal, which converts to any reference type.
#[derive(Debug, Clone)]
pub struct Typed {
    pub value: RtValue,
    pub ty: Option<TypeRef>,
}

impl Typed {
    pub fn new(value: RtValue, ty: TypeRef) -> Self {
        Self {
            value,
            ty: Some(ty),
        }
    }

    pub fn null() -> Self {
        Self {
            value: RtValue::Null,
            ty: None,
        }
    }

    pub fn int(v: i64) -> Self {
        Self::new(RtValue::Int(v), TypeRef::int())
    }

    pub fn long(v: i64) -> Self {
        Self::new(RtValue::Int(v), TypeRef::long())
    }

    pub fn bool(v: bool) -> Self {
        Self::new(RtValue::Bool(v), TypeRef::bool())
    }

    pub fn string(v: &str) -> Self {
        Self::new(RtValue::str(v), TypeRef::string())
    }

    /// A fresh modifiable `List<String>`.
    pub fn string_list(items: &[&str]) -> Self {
        let list = ListRef::new(items.iter().map(|s| RtValue::str(s)).collect());
        Self::new(RtValue::List(list), TypeRef::list(TypeRef::string()))
    }

    /// A `String[]`.
    pub fn string_array(items: &[&str]) -> Self {
        let items = items.iter().map(|s| RtValue::str(s)).collect();
        Self::new(
            RtValue::Array(Rc::new(items)),
            TypeRef::array(TypeRef::string()),
        )
    }
}
