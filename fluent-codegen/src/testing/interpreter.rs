//! Executes an emitted [`CodeModel`] with Java's typing rules.
//!
//! Method calls are resolved against the static type of the receiver the
//! way `javac` does it: overloads are compared by erased parameter types,
//! the most specific applicable one wins, and a generic return type is
//! inferred from the argument bound to it. The chosen method is then
//! dispatched on the runtime class, so only methods with the same erasure
//! override each other. A call the static type cannot answer fails with
//! [`InterpError::NoSuchMethod`], which is what a compiler would report.

use std::{cell::Cell, collections::HashMap, rc::Rc};

use thiserror::Error;

use super::value::{Instance, RtValue, Typed};
use crate::{
    builder::{MethodSpec, OBJECT_TYPE, PrimitiveType, Statement, TypeRef, Value},
    code_model::{CodeModel, TypeId},
};

const MAX_DEPTH: usize = 256;

/// Failure while executing the code model.
#[derive(Debug, Error)]
pub enum InterpError {
    #[error("unknown type '{0}'")]
    UnknownType(String),

    #[error("no method {signature} applicable in '{ty}'")]
    NoSuchMethod { ty: String, signature: String },

    #[error("call {signature} in '{ty}' is ambiguous")]
    Ambiguous { ty: String, signature: String },

    #[error("no field '{name}' in '{ty}'")]
    NoSuchField { ty: String, name: String },

    #[error("unknown variable '{0}'")]
    UnknownVariable(String),

    #[error("cannot instantiate abstract type '{0}'")]
    AbstractInstantiation(String),

    #[error("'{member}' accessed on null")]
    NullReceiver { member: String },

    #[error("'{member}' accessed on a value that is not an object")]
    NotAnObject { member: String },

    #[error("'this' used in a static context")]
    NoReceiver,

    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    #[error("list is read-only")]
    ReadOnlyList,

    #[error("unsupported construct: {0}")]
    Unsupported(String),

    #[error("call depth limit exceeded")]
    StackOverflow,
}

type Result<T> = std::result::Result<T, InterpError>;

/// Interpreter over one code model.
pub struct Interpreter<'m> {
    model: &'m CodeModel,
    depth: Cell<usize>,
}

/// Activation record of a running method.
struct Frame {
    this: Option<Rc<Instance>>,
    /// Type declaring the running method.
    owner: TypeId,
    locals: HashMap<String, Typed>,
}

/// A method chosen by resolution.
#[derive(Clone, Copy)]
struct Resolved<'m> {
    owner: TypeId,
    method: &'m MethodSpec,
    /// Trailing arguments are packed into the varargs array.
    packed: bool,
}

impl<'m> Interpreter<'m> {
    pub fn new(model: &'m CodeModel) -> Self {
        Self {
            model,
            depth: Cell::new(0),
        }
    }

    /// Create an instance with the no-argument constructor.
    pub fn instantiate(&self, type_name: &str) -> Result<Typed> {
        let ty = self.find(type_name)?;
        self.new_instance(ty)
    }

    /// Call a static method: `Type.method(args)`.
    pub fn call_static(&self, type_name: &str, method: &str, args: Vec<Typed>) -> Result<Typed> {
        let ty = self.find(type_name)?;
        let resolved = self.resolve(ty, method, &args, true)?;
        self.invoke(None, resolved, args)
    }

    /// Call an instance method: `receiver.method(args)`.
    pub fn call(&self, receiver: &Typed, method: &str, args: Vec<Typed>) -> Result<Typed> {
        let (object, static_ty) = self.object_of(receiver, method)?;
        let resolved = self.resolve(static_ty, method, &args, false)?;
        let target = self.dispatch(object.class, resolved);
        self.invoke(Some(object), target, args)
    }

    /// Read a field, searching from the runtime class of `object` upward.
    pub fn field(&self, object: &Typed, name: &str) -> Result<RtValue> {
        let object = object
            .value
            .as_object()
            .ok_or_else(|| InterpError::NotAnObject {
                member: name.to_string(),
            })?;
        let owner = self.field_owner(object.class, name)?;
        self.read_field(object, owner, name)
    }

    fn find(&self, type_name: &str) -> Result<TypeId> {
        self.model
            .lookup(type_name)
            .ok_or_else(|| InterpError::UnknownType(type_name.to_string()))
    }

    fn type_name(&self, id: TypeId) -> String {
        self.model.get(id).qualified_name.clone()
    }

    fn new_instance(&self, ty: TypeId) -> Result<Typed> {
        let decl = self.model.get(ty);
        if decl.spec.is_abstract {
            return Err(InterpError::AbstractInstantiation(
                decl.qualified_name.clone(),
            ));
        }

        let instance = Rc::new(Instance::new(ty));
        let frame = Frame {
            this: None,
            owner: ty,
            locals: HashMap::new(),
        };
        for owner in self.model.supertypes(ty) {
            for field in self.model.get(owner).fields.iter().filter(|f| !f.is_static) {
                let value = match &field.initializer {
                    Some(init) => self.eval(&frame, init)?.value,
                    None => default_value(&field.ty),
                };
                instance
                    .fields
                    .borrow_mut()
                    .insert((owner, field.name.clone()), value);
            }
        }

        Ok(Typed::new(
            RtValue::Object(instance),
            self.model.type_ref_of(ty),
        ))
    }

    /// Pick the method a compiler would bind `name(args)` to on `ty`.
    fn resolve(
        &self,
        ty: TypeId,
        name: &str,
        args: &[Typed],
        want_static: bool,
    ) -> Result<Resolved<'m>> {
        // Nearest declaration of each erased signature hides the others.
        let mut candidates: Vec<(TypeId, &'m MethodSpec)> = Vec::new();
        for owner in self.model.supertypes(ty) {
            for method in self.model.get(owner).methods.iter() {
                if method.name != name || method.is_static != want_static {
                    continue;
                }
                let erased = method.erased_params();
                if candidates.iter().any(|(_, m)| m.erased_params() == erased) {
                    continue;
                }
                candidates.push((owner, method));
            }
        }

        let arg_types: Vec<Option<&TypeRef>> = args.iter().map(|a| a.ty.as_ref()).collect();
        for packed in [false, true] {
            let applicable: Vec<_> = candidates
                .iter()
                .copied()
                .filter(|(_, m)| self.applicable(m, &arg_types, packed))
                .collect();
            if applicable.is_empty() {
                continue;
            }
            let (owner, method) = self.most_specific(&applicable).ok_or_else(|| {
                InterpError::Ambiguous {
                    ty: self.type_name(ty),
                    signature: call_signature(name, &arg_types),
                }
            })?;
            return Ok(Resolved {
                owner,
                method,
                packed,
            });
        }

        Err(InterpError::NoSuchMethod {
            ty: self.type_name(ty),
            signature: call_signature(name, &arg_types),
        })
    }

    fn applicable(&self, method: &MethodSpec, args: &[Option<&TypeRef>], packed: bool) -> bool {
        let params = method.erased_params();
        if !packed {
            return params.len() == args.len()
                && args
                    .iter()
                    .zip(&params)
                    .all(|(arg, param)| self.assignable(*arg, param));
        }

        if !method.is_variadic() || args.len() + 1 < params.len() {
            return false;
        }
        let fixed = params.len() - 1;
        let Some(element) = params[fixed].element_type() else {
            return false;
        };
        args[..fixed]
            .iter()
            .zip(&params[..fixed])
            .all(|(arg, param)| self.assignable(*arg, param))
            && args[fixed..]
                .iter()
                .all(|arg| self.assignable(*arg, element))
    }

    fn most_specific(
        &self,
        applicable: &[(TypeId, &'m MethodSpec)],
    ) -> Option<(TypeId, &'m MethodSpec)> {
        applicable.iter().copied().find(|(_, method)| {
            applicable
                .iter()
                .all(|(_, other)| self.at_least_as_specific(method, other))
        })
    }

    fn at_least_as_specific(&self, method: &MethodSpec, other: &MethodSpec) -> bool {
        if std::ptr::eq(method, other) {
            return true;
        }
        let mine = method.erased_params();
        let theirs = other.erased_params();
        mine.len() == theirs.len()
            && mine
                .iter()
                .zip(&theirs)
                .all(|(a, b)| self.assignable(Some(a), b))
    }

    /// Whether a value of static type `from` converts to `to` by identity,
    /// primitive widening or reference widening. `None` is the null type.
    fn assignable(&self, from: Option<&TypeRef>, to: &TypeRef) -> bool {
        let Some(from) = from else {
            return to.is_reference();
        };
        if from == to {
            return true;
        }
        match (from, to) {
            (TypeRef::Primitive(a), TypeRef::Primitive(b)) => widens(*a, *b),
            (_, TypeRef::Named(object)) if object == OBJECT_TYPE => from.is_reference(),
            (TypeRef::Named(a), TypeRef::Named(b)) => {
                match (self.model.lookup(a), self.model.lookup(b)) {
                    (Some(a), Some(b)) => self.model.is_subtype(a, b),
                    _ => false,
                }
            }
            (TypeRef::Array(a), TypeRef::Array(b)) => {
                a.is_reference() && b.is_reference() && self.assignable(Some(&**a), b)
            }
            _ => false,
        }
    }

    /// The override of `resolved` that runs for an object of class `runtime`.
    fn dispatch(&self, runtime: TypeId, resolved: Resolved<'m>) -> Resolved<'m> {
        let erased = resolved.method.erased_params();
        for owner in self.model.supertypes(runtime) {
            if owner == resolved.owner {
                break;
            }
            let overriding = self.model.get(owner).methods.iter().find(|m| {
                m.name == resolved.method.name && !m.is_static && m.erased_params() == erased
            });
            if let Some(method) = overriding {
                return Resolved {
                    owner,
                    method,
                    packed: resolved.packed,
                };
            }
        }
        resolved
    }

    fn invoke(
        &self,
        this: Option<Rc<Instance>>,
        resolved: Resolved<'m>,
        args: Vec<Typed>,
    ) -> Result<Typed> {
        let depth = self.depth.get();
        if depth >= MAX_DEPTH {
            return Err(InterpError::StackOverflow);
        }
        self.depth.set(depth + 1);
        let result = self.run(this, resolved, args);
        self.depth.set(depth);
        result
    }

    fn run(
        &self,
        this: Option<Rc<Instance>>,
        resolved: Resolved<'m>,
        mut args: Vec<Typed>,
    ) -> Result<Typed> {
        let method = resolved.method;

        if resolved.packed {
            let fixed = method.params.len() - 1;
            let rest = args.split_off(fixed);
            let array_ty = method.erase(&method.params[fixed].ty);
            let items = rest.into_iter().map(|a| a.value).collect();
            args.push(Typed::new(RtValue::Array(Rc::new(items)), array_ty));
        }

        let mut bindings: HashMap<&str, TypeRef> = HashMap::new();
        let mut locals = HashMap::new();
        for (param, arg) in method.params.iter().zip(args) {
            let declared = method.erase(&param.ty);
            if let TypeRef::TypeVar(var) = &param.ty {
                bindings.insert(var.as_str(), arg.ty.clone().unwrap_or_else(|| declared.clone()));
            }
            locals.insert(param.name.clone(), Typed::new(arg.value, declared));
        }

        let frame = Frame {
            this,
            owner: resolved.owner,
            locals,
        };
        let returned = self.exec(&frame, &method.body)?;

        let Some(return_type) = &method.return_type else {
            return Ok(Typed::new(RtValue::Null, TypeRef::Unit));
        };
        let value = match returned {
            Some(value) => {
                let expected = method.erase(return_type);
                if !self.assignable(value.ty.as_ref(), &expected) {
                    return Err(mismatch(&expected, value.ty.as_ref()));
                }
                value.value
            }
            None => {
                return Err(InterpError::Unsupported(format!(
                    "method '{}' ended without returning a value",
                    method.name
                )));
            }
        };
        let ty = match return_type {
            TypeRef::TypeVar(var) => bindings
                .get(var.as_str())
                .cloned()
                .unwrap_or_else(|| method.erase(return_type)),
            other => other.clone(),
        };
        Ok(Typed::new(value, ty))
    }

    fn exec(&self, frame: &Frame, body: &[Statement]) -> Result<Option<Typed>> {
        for statement in body {
            match statement {
                Statement::Assign { target, value } => {
                    let value = self.eval(frame, value)?;
                    self.assign(frame, target, value)?;
                }
                Statement::Return(Some(value)) => return Ok(Some(self.eval(frame, value)?)),
                Statement::Return(None) => return Ok(None),
                Statement::Expr(value) => {
                    self.eval(frame, value)?;
                }
            }
        }
        Ok(None)
    }

    fn assign(&self, frame: &Frame, target: &Value, value: Typed) -> Result<()> {
        let Value::Field { target, name } = target else {
            return Err(InterpError::Unsupported(format!(
                "assignment to {:?}",
                target
            )));
        };
        let receiver = self.eval(frame, target)?;
        let (object, static_ty) = self.object_of(&receiver, name)?;
        let owner = self.field_owner(static_ty, name)?;
        let declared = &self.field_type(owner, name)?;
        if !self.assignable(value.ty.as_ref(), declared) {
            return Err(mismatch(declared, value.ty.as_ref()));
        }
        object
            .fields
            .borrow_mut()
            .insert((owner, name.clone()), value.value);
        Ok(())
    }

    fn eval(&self, frame: &Frame, value: &Value) -> Result<Typed> {
        match value {
            Value::Null => Ok(Typed::null()),
            Value::Bool(v) => Ok(Typed::bool(*v)),
            Value::Int(v) => Ok(Typed::int(*v)),
            Value::String(v) => Ok(Typed::string(v)),
            Value::Ident(name) => frame
                .locals
                .get(name)
                .cloned()
                .ok_or_else(|| InterpError::UnknownVariable(name.clone())),
            Value::This => {
                let this = frame.this.clone().ok_or(InterpError::NoReceiver)?;
                Ok(Typed::new(
                    RtValue::Object(this),
                    self.model.type_ref_of(frame.owner),
                ))
            }
            Value::Field { target, name } => {
                let receiver = self.eval(frame, target)?;
                let (object, static_ty) = self.object_of(&receiver, name)?;
                let owner = self.field_owner(static_ty, name)?;
                let value = self.read_field(&object, owner, name)?;
                Ok(Typed::new(value, self.field_type(owner, name)?))
            }
            Value::New(ty) => {
                let name = ty
                    .as_named()
                    .ok_or_else(|| InterpError::Unsupported(format!("new {}", ty)))?;
                self.instantiate(name)
            }
            Value::Call {
                target,
                method,
                args,
            } => {
                let args = self.eval_all(frame, args)?;
                if !matches!(**target, Value::This) {
                    let receiver = self.eval(frame, target)?;
                    return self.call(&receiver, method, args);
                }
                match &frame.this {
                    Some(this) => {
                        let resolved = self.resolve(frame.owner, method, &args, false)?;
                        let target = self.dispatch(this.class, resolved);
                        self.invoke(Some(Rc::clone(this)), target, args)
                    }
                    None => {
                        let resolved = self.resolve(frame.owner, method, &args, true)?;
                        self.invoke(None, resolved, args)
                    }
                }
            }
            Value::SuperCall { method, args } => {
                let this = frame.this.clone().ok_or(InterpError::NoReceiver)?;
                let args = self.eval_all(frame, args)?;
                let Some(parent) = self.model.get(frame.owner).extends else {
                    return Err(InterpError::NoSuchMethod {
                        ty: format!("super of {}", self.type_name(frame.owner)),
                        signature: method.clone(),
                    });
                };
                let resolved = self.resolve(parent, method, &args, false)?;
                self.invoke(Some(this), resolved, args)
            }
            Value::CopyList(inner) | Value::UnmodifiableList(inner) => {
                let list = self.eval(frame, inner)?;
                let adapted = match &list.value {
                    RtValue::Null => RtValue::Null,
                    RtValue::List(items) if matches!(value, Value::CopyList(_)) => {
                        RtValue::List(items.copy())
                    }
                    RtValue::List(items) => RtValue::List(items.read_only_view()),
                    _ => {
                        let expected = TypeRef::list(TypeRef::named(OBJECT_TYPE));
                        return Err(mismatch(&expected, list.ty.as_ref()));
                    }
                };
                Ok(Typed {
                    value: adapted,
                    ty: list.ty,
                })
            }
        }
    }

    fn eval_all(&self, frame: &Frame, values: &[Value]) -> Result<Vec<Typed>> {
        values.iter().map(|v| self.eval(frame, v)).collect()
    }

    /// The object behind `value` and the type its members resolve against.
    fn object_of(&self, value: &Typed, member: &str) -> Result<(Rc<Instance>, TypeId)> {
        let object = match &value.value {
            RtValue::Object(object) => Rc::clone(object),
            RtValue::Null => {
                return Err(InterpError::NullReceiver {
                    member: member.to_string(),
                });
            }
            _ => {
                return Err(InterpError::NotAnObject {
                    member: member.to_string(),
                });
            }
        };
        let static_ty = value
            .ty
            .as_ref()
            .and_then(TypeRef::as_named)
            .and_then(|name| self.model.lookup(name))
            .unwrap_or(object.class);
        Ok((object, static_ty))
    }

    /// Nearest type from `from` upward declaring an instance field `name`.
    fn field_owner(&self, from: TypeId, name: &str) -> Result<TypeId> {
        self.model
            .supertypes(from)
            .find(|&t| {
                self.model
                    .get(t)
                    .field(name)
                    .is_some_and(|f| !f.is_static)
            })
            .ok_or_else(|| InterpError::NoSuchField {
                ty: self.type_name(from),
                name: name.to_string(),
            })
    }

    fn field_type(&self, owner: TypeId, name: &str) -> Result<TypeRef> {
        self.model
            .get(owner)
            .field(name)
            .map(|f| f.ty.clone())
            .ok_or_else(|| InterpError::NoSuchField {
                ty: self.type_name(owner),
                name: name.to_string(),
            })
    }

    fn read_field(&self, object: &Instance, owner: TypeId, name: &str) -> Result<RtValue> {
        object
            .fields
            .borrow()
            .get(&(owner, name.to_string()))
            .cloned()
            .ok_or_else(|| InterpError::NoSuchField {
                ty: self.type_name(object.class),
                name: name.to_string(),
            })
    }
}

fn widens(from: PrimitiveType, to: PrimitiveType) -> bool {
    use PrimitiveType::*;
    matches!(
        (from, to),
        (Byte | Char, Int | Long | Float | Double)
            | (Int, Long | Float | Double)
            | (Long, Float | Double)
            | (Float, Double)
    )
}

fn default_value(ty: &TypeRef) -> RtValue {
    match ty {
        TypeRef::Primitive(PrimitiveType::Int | PrimitiveType::Long | PrimitiveType::Byte) => {
            RtValue::Int(0)
        }
        TypeRef::Primitive(PrimitiveType::Float | PrimitiveType::Double) => RtValue::Float(0.0),
        TypeRef::Primitive(PrimitiveType::Bool) => RtValue::Bool(false),
        TypeRef::Primitive(PrimitiveType::Char) => RtValue::Char('\0'),
        _ => RtValue::Null,
    }
}

fn call_signature(name: &str, args: &[Option<&TypeRef>]) -> String {
    let args: Vec<String> = args
        .iter()
        .map(|ty| ty.map_or_else(|| "null".to_string(), ToString::to_string))
        .collect();
    format!("{}({})", name, args.join(", "))
}

fn mismatch(expected: &TypeRef, found: Option<&TypeRef>) -> InterpError {
    InterpError::TypeMismatch {
        expected: expected.to_string(),
        found: found.map_or_else(|| "null".to_string(), ToString::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{FieldSpec, GenericParam, ParamSpec, TypeSpec};

    /// `Animal { name }` with an overridable `describe()` and an overloaded
    /// `greet`, plus `Dog extends Animal` overriding `describe()`.
    fn zoo() -> CodeModel {
        let mut model = CodeModel::new();
        let animal = model
            .declare_class("zoo.Animal", TypeSpec::class("Animal"))
            .unwrap();
        let dog = model.declare_class("zoo.Dog", TypeSpec::class("Dog")).unwrap();
        model.get_mut(dog).extends = Some(animal);

        model
            .add_field(animal, FieldSpec::new("name", TypeRef::string()).protected())
            .unwrap();
        model
            .add_method(
                animal,
                MethodSpec::new("describe")
                    .returns(TypeRef::string())
                    .statement(Statement::return_(Value::string("animal"))),
            )
            .unwrap();
        model
            .add_method(
                dog,
                MethodSpec::new("describe")
                    .returns(TypeRef::string())
                    .statement(Statement::return_(Value::string("dog"))),
            )
            .unwrap();
        model
            .add_method(
                animal,
                MethodSpec::new("greet")
                    .param(ParamSpec::new("other", TypeRef::named("zoo.Animal")))
                    .returns(TypeRef::string())
                    .statement(Statement::return_(Value::string("any"))),
            )
            .unwrap();
        model
            .add_method(
                animal,
                MethodSpec::new("greet")
                    .param(ParamSpec::new("other", TypeRef::named("zoo.Dog")))
                    .returns(TypeRef::string())
                    .statement(Statement::return_(Value::string("dog"))),
            )
            .unwrap();
        model
            .add_method(
                animal,
                MethodSpec::new("same")
                    .generic(GenericParam::new("T").bound(TypeRef::named("zoo.Animal")))
                    .param(ParamSpec::new("value", TypeRef::type_var("T")))
                    .returns(TypeRef::type_var("T"))
                    .statement(Statement::return_(Value::ident("value"))),
            )
            .unwrap();
        model
            .add_method(
                animal,
                MethodSpec::new("count")
                    .param(ParamSpec::variadic("names", TypeRef::string()))
                    .returns(TypeRef::array(TypeRef::string()))
                    .statement(Statement::return_(Value::ident("names"))),
            )
            .unwrap();
        model
    }

    #[test]
    fn test_virtual_dispatch() {
        let model = zoo();
        let interp = Interpreter::new(&model);
        let dog = interp.instantiate("zoo.Dog").unwrap();
        let as_animal = Typed::new(dog.value.clone(), TypeRef::named("zoo.Animal"));

        let result = interp.call(&as_animal, "describe", vec![]).unwrap();
        assert_eq!(result.value.as_str(), Some("dog"));
    }

    #[test]
    fn test_overload_uses_static_argument_type() {
        let model = zoo();
        let interp = Interpreter::new(&model);
        let animal = interp.instantiate("zoo.Animal").unwrap();
        let dog = interp.instantiate("zoo.Dog").unwrap();
        let dog_as_animal = Typed::new(dog.value.clone(), TypeRef::named("zoo.Animal"));

        let specific = interp.call(&animal, "greet", vec![dog]).unwrap();
        assert_eq!(specific.value.as_str(), Some("dog"));
        let general = interp.call(&animal, "greet", vec![dog_as_animal]).unwrap();
        assert_eq!(general.value.as_str(), Some("any"));
    }

    #[test]
    fn test_generic_return_inferred_from_argument() {
        let model = zoo();
        let interp = Interpreter::new(&model);
        let animal = interp.instantiate("zoo.Animal").unwrap();
        let dog = interp.instantiate("zoo.Dog").unwrap();

        let result = interp.call(&animal, "same", vec![dog.clone()]).unwrap();
        assert_eq!(result.ty, Some(TypeRef::named("zoo.Dog")));
        assert!(result.value.same(&dog.value));
    }

    #[test]
    fn test_varargs_packing() {
        let model = zoo();
        let interp = Interpreter::new(&model);
        let animal = interp.instantiate("zoo.Animal").unwrap();

        let none = interp.call(&animal, "count", vec![]).unwrap();
        assert_eq!(none.value.as_array().map(<[RtValue]>::len), Some(0));

        let two = interp
            .call(&animal, "count", vec![Typed::string("a"), Typed::string("b")])
            .unwrap();
        assert_eq!(two.value.strings(), Some(vec!["a".into(), "b".into()]));

        let array = Typed::string_array(&["x"]);
        let passed = interp.call(&animal, "count", vec![array.clone()]).unwrap();
        assert!(passed.value.same(&array.value));
    }

    #[test]
    fn test_missing_method_and_bad_argument() {
        let model = zoo();
        let interp = Interpreter::new(&model);
        let animal = interp.instantiate("zoo.Animal").unwrap();

        let err = interp.call(&animal, "bark", vec![]).unwrap_err();
        assert!(matches!(err, InterpError::NoSuchMethod { .. }));
        assert_eq!(err.to_string(), "no method bark() applicable in 'zoo.Animal'");

        let err = interp
            .call(&animal, "greet", vec![Typed::int(1)])
            .unwrap_err();
        assert!(matches!(err, InterpError::NoSuchMethod { .. }));
    }

    #[test]
    fn test_fields_default_and_null_receiver() {
        let model = zoo();
        let interp = Interpreter::new(&model);
        let dog = interp.instantiate("zoo.Dog").unwrap();

        assert!(interp.field(&dog, "name").unwrap().is_null());
        assert!(matches!(
            interp.call(&Typed::null(), "describe", vec![]),
            Err(InterpError::NullReceiver { .. })
        ));
    }

    #[test]
    fn test_abstract_instantiation() {
        let mut model = CodeModel::new();
        model
            .declare_class("a.Shape", TypeSpec::class("Shape").abstract_(true))
            .unwrap();
        let interp = Interpreter::new(&model);
        assert!(matches!(
            interp.instantiate("a.Shape"),
            Err(InterpError::AbstractInstantiation(_))
        ));
    }
}
