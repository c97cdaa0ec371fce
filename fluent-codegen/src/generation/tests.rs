//! Behaviour of generated builders, executed through the interpreter.

use fluent_model::{ClassHierarchy, ClassId, ClassModel, ElementType, FieldModel};

use super::*;
use crate::{
    builder::{Statement, TypeRef, Value, Visibility},
    code_model::CodeModel,
    pipeline::{CompilationContext, GeneratorConfig, Pipeline},
    testing::{InterpError, Interpreter, RtValue, Typed},
};

/// `Base{id:int}` (abstract) → `Mid{name:string}` → `Leaf{tags:string[]}`.
fn chain() -> ClassHierarchy {
    let mut model = ClassHierarchy::new();
    let base = model.push(
        ClassModel::new("a.Base")
            .abstract_()
            .field(FieldModel::new("id", ElementType::int())),
    );
    let mid = model.push(
        ClassModel::new("a.Mid")
            .extends(base)
            .field(FieldModel::new("name", ElementType::string())),
    );
    model.push(
        ClassModel::new("a.Leaf")
            .extends(mid)
            .field(FieldModel::array("tags", ElementType::string())),
    );
    model
}

fn orders() -> ClassHierarchy {
    let mut model = ClassHierarchy::new();
    model.push(ClassModel::new("shop.Order").field(FieldModel::list("lines", ElementType::string())));
    model
}

fn generate(model: ClassHierarchy, policy: PolicyKind) -> CompilationContext {
    Pipeline::new()
        .run_model(model, GeneratorConfig::default().policy(policy))
        .unwrap()
}

fn method_names(code: &CodeModel, ty: &str) -> Vec<String> {
    let id = code.lookup(ty).unwrap();
    code.get(id).methods.iter().map(|m| m.name.clone()).collect()
}

fn declare_products(model: &ClassHierarchy) -> CodeModel {
    let mut code = CodeModel::new();
    for (_, class) in model.iter() {
        code.declare_class(
            &class.name,
            crate::builder::TypeSpec::class(class.simple_name()).abstract_(class.is_abstract),
        )
        .unwrap();
    }
    code
}

fn builder_ty(product: &str) -> Option<TypeRef> {
    Some(TypeRef::named(format!("{}.Builder", product)))
}

#[test]
fn test_root_without_fields_init_returns_product() {
    let mut model = ClassHierarchy::new();
    model.push(ClassModel::new("a.Empty"));
    let ctx = generate(model, PolicyKind::Mutable);

    let builder = ctx.code.lookup("a.Empty.Builder").unwrap();
    let init = ctx.code.get(builder).methods_named("init").next().unwrap();
    assert_eq!(init.body, vec![Statement::return_(Value::ident("product"))]);
    assert_eq!(init.visibility, Visibility::Protected);
    assert_eq!(init.return_type, Some(TypeRef::type_var("P")));
    assert_eq!(init.generics[0].bounds, vec![TypeRef::named("a.Empty")]);
    assert!(ctx.code.get(builder).extends.is_none());

    let interp = Interpreter::new(&ctx.code);
    let builder = interp.call_static("a.Empty", "builder", vec![]).unwrap();
    let product = interp.call(&builder, "build", vec![]).unwrap();
    assert_eq!(product.ty, Some(TypeRef::named("a.Empty")));
}

#[test]
fn test_every_setter_returns_the_leaf_builder() {
    let ctx = generate(chain(), PolicyKind::Mutable);
    let interp = Interpreter::new(&ctx.code);

    let calls: [(&str, Vec<Typed>); 3] = [
        ("withTags", vec![Typed::string("t")]),
        ("withId", vec![Typed::int(1)]),
        ("withName", vec![Typed::string("n")]),
    ];
    let mut builder = interp.call_static("a.Leaf", "builder", vec![]).unwrap();
    for (setter, args) in calls {
        builder = interp.call(&builder, setter, args).unwrap();
        assert_eq!(builder.ty, builder_ty("a.Leaf"), "{} lost the builder type", setter);
    }
}

#[test]
fn test_round_trip_across_chain() {
    let ctx = generate(chain(), PolicyKind::Mutable);
    let interp = Interpreter::new(&ctx.code);

    let builder = interp.call_static("a.Leaf", "builder", vec![]).unwrap();
    let builder = interp.call(&builder, "withId", vec![Typed::int(7)]).unwrap();
    let builder = interp
        .call(&builder, "withName", vec![Typed::string("leaf")])
        .unwrap();
    let builder = interp
        .call(
            &builder,
            "withTags",
            vec![Typed::string("a"), Typed::string("b"), Typed::string("c")],
        )
        .unwrap();
    let leaf = interp.call(&builder, "build", vec![]).unwrap();

    assert_eq!(leaf.ty, Some(TypeRef::named("a.Leaf")));
    assert_eq!(interp.field(&leaf, "id").unwrap().as_int(), Some(7));
    assert_eq!(interp.field(&leaf, "name").unwrap().as_str(), Some("leaf"));
    assert_eq!(
        interp.field(&leaf, "tags").unwrap().strings(),
        Some(vec!["a".into(), "b".into(), "c".into()])
    );

    // The middle of the chain builds on its own too.
    let builder = interp.call_static("a.Mid", "builder", vec![]).unwrap();
    let builder = interp.call(&builder, "withId", vec![Typed::int(3)]).unwrap();
    assert_eq!(builder.ty, builder_ty("a.Mid"));
    let mid = interp.call(&builder, "build", vec![]).unwrap();
    assert_eq!(interp.field(&mid, "id").unwrap().as_int(), Some(3));
    assert!(interp.field(&mid, "name").unwrap().is_null());

    let builder = interp.call_static("a.Mid", "builder", vec![]).unwrap();
    let builder = interp.call(&builder, "withId", vec![Typed::int(2)]).unwrap();
    let builder = interp
        .call(&builder, "withName", vec![Typed::string("y")])
        .unwrap();
    assert_eq!(builder.ty, builder_ty("a.Mid"));
    let mid = interp.call(&builder, "build", vec![]).unwrap();
    assert_eq!(mid.ty, Some(TypeRef::named("a.Mid")));
    assert_eq!(interp.field(&mid, "id").unwrap().as_int(), Some(2));
    assert_eq!(interp.field(&mid, "name").unwrap().as_str(), Some("y"));
}

#[test]
fn test_varargs_zero_and_order() {
    let ctx = generate(chain(), PolicyKind::Mutable);
    let interp = Interpreter::new(&ctx.code);

    let builder = interp.call_static("a.Leaf", "builder", vec![]).unwrap();
    let unset = interp.call(&builder, "build", vec![]).unwrap();
    assert!(interp.field(&unset, "tags").unwrap().is_null());

    let builder = interp.call(&builder, "withTags", vec![]).unwrap();
    let empty = interp.call(&builder, "build", vec![]).unwrap();
    assert_eq!(
        interp.field(&empty, "tags").unwrap().as_array().map(<[RtValue]>::len),
        Some(0)
    );

    let builder = interp.call_static("a.Leaf", "builder", vec![]).unwrap();
    let builder = interp
        .call(&builder, "withTags", vec![Typed::string("z"), Typed::string("a")])
        .unwrap();
    let leaf = interp.call(&builder, "build", vec![]).unwrap();
    assert_eq!(
        interp.field(&leaf, "tags").unwrap().strings(),
        Some(vec!["z".into(), "a".into()])
    );
}

#[test]
fn test_inherited_setters_are_overrides() {
    let ctx = generate(chain(), PolicyKind::Mutable);
    let leaf_builder = ctx.code.lookup("a.Leaf.Builder").unwrap();
    let mid_builder = ctx.code.lookup("a.Mid.Builder").unwrap();
    let decl = ctx.code.get(leaf_builder);

    assert_eq!(decl.extends, Some(mid_builder));
    let overrides: Vec<_> = decl
        .methods
        .iter()
        .filter(|m| m.is_override())
        .map(|m| m.name.as_str())
        .collect();
    assert_eq!(overrides, vec!["withName", "withId"]);
    assert!(!decl.methods_named("withTags").next().unwrap().is_override());

    let init = decl.methods_named("init").next().unwrap();
    assert_eq!(
        init.body.last(),
        Some(&Statement::return_(Value::super_call(
            "init",
            vec![Value::ident("product")]
        )))
    );
}

#[test]
fn test_abstract_class_has_no_build() {
    let ctx = generate(chain(), PolicyKind::Mutable);
    let interp = Interpreter::new(&ctx.code);

    assert!(!method_names(&ctx.code, "a.Base.Builder").contains(&"build".to_string()));
    assert!(!method_names(&ctx.code, "a.Base").contains(&"builder".to_string()));
    assert!(matches!(
        interp.call_static("a.Base", "builder", vec![]),
        Err(InterpError::NoSuchMethod { .. })
    ));
    assert!(!ctx.code.get(ctx.code.lookup("a.Base.Builder").unwrap()).spec.is_abstract);
}

#[test]
fn test_static_fields_never_become_setters() {
    let mut model = ClassHierarchy::new();
    let base = model.push(ClassModel::new("a.Base").field(FieldModel::new("id", ElementType::int())));
    model.push(
        ClassModel::new("a.Settings")
            .extends(base)
            .field(FieldModel::new("VERSION", ElementType::int()).static_()),
    );
    let ctx = generate(model, PolicyKind::Mutable);

    assert_eq!(
        method_names(&ctx.code, "a.Settings.Builder"),
        vec!["init", "withId", "build"]
    );
    let registry = ctx.registry.as_ref().unwrap();
    assert_eq!(registry.get("a.Settings").unwrap().properties(), Some(&[][..]));

    let interp = Interpreter::new(&ctx.code);
    let builder = interp.call_static("a.Settings", "builder", vec![]).unwrap();
    assert!(matches!(
        interp.call(&builder, "withVERSION", vec![Typed::int(2)]),
        Err(InterpError::NoSuchMethod { .. })
    ));
    let builder = interp.call(&builder, "withId", vec![Typed::int(5)]).unwrap();
    let settings = interp.call(&builder, "build", vec![]).unwrap();
    assert_eq!(interp.field(&settings, "id").unwrap().as_int(), Some(5));
}

#[test]
fn test_static_and_instance_field_in_one_class() {
    let mut model = ClassHierarchy::new();
    model.push(
        ClassModel::new("a.Point")
            .field(FieldModel::new("x", ElementType::int()))
            .field(FieldModel::new("Y", ElementType::int()).static_()),
    );
    let ctx = generate(model, PolicyKind::Mutable);

    let setters: Vec<_> = method_names(&ctx.code, "a.Point.Builder")
        .into_iter()
        .filter(|name| name.starts_with("with"))
        .collect();
    assert_eq!(setters, vec!["withX"]);
    let builder = ctx.code.lookup("a.Point.Builder").unwrap();
    assert!(ctx.code.get(builder).field("Y").is_none());

    let interp = Interpreter::new(&ctx.code);
    let builder = interp.call_static("a.Point", "builder", vec![]).unwrap();
    assert!(matches!(
        interp.call(&builder, "withY", vec![Typed::int(1)]),
        Err(InterpError::NoSuchMethod { .. })
    ));
    let builder = interp.call(&builder, "withX", vec![Typed::int(4)]).unwrap();
    let point = interp.call(&builder, "build", vec![]).unwrap();
    assert_eq!(interp.field(&point, "x").unwrap().as_int(), Some(4));
}

#[test]
fn test_shadowed_field_keeps_chaining() {
    let mut model = ClassHierarchy::new();
    let base = model.push(ClassModel::new("a.Base").field(FieldModel::new("x", ElementType::int())));
    model.push(
        ClassModel::new("a.Leaf")
            .extends(base)
            .field(FieldModel::new("x", ElementType::string()))
            .field(FieldModel::new("y", ElementType::int())),
    );
    let ctx = generate(model, PolicyKind::Mutable);

    let leaf_builder = ctx.code.lookup("a.Leaf.Builder").unwrap();
    let with_x: Vec<_> = ctx.code.get(leaf_builder).methods_named("withX").collect();
    assert_eq!(with_x.len(), 2);
    let overridden: Vec<_> = with_x.iter().filter(|m| m.is_override()).collect();
    assert_eq!(overridden.len(), 1);
    // Leaf.Builder's own `x` hides Base.Builder's, so the override delegates.
    assert_eq!(
        overridden[0].body[0],
        Statement::expr(Value::super_call("withX", vec![Value::ident("x")]))
    );

    let interp = Interpreter::new(&ctx.code);
    let builder = interp.call_static("a.Leaf", "builder", vec![]).unwrap();
    let builder = interp.call(&builder, "withX", vec![Typed::int(1)]).unwrap();
    assert_eq!(builder.ty, builder_ty("a.Leaf"));
    let builder = interp.call(&builder, "withY", vec![Typed::int(2)]).unwrap();
    let builder = interp
        .call(&builder, "withX", vec![Typed::string("s")])
        .unwrap();
    let leaf = interp.call(&builder, "build", vec![]).unwrap();
    assert_eq!(leaf.ty, Some(TypeRef::named("a.Leaf")));
    assert_eq!(interp.field(&leaf, "x").unwrap().as_str(), Some("s"));
    assert_eq!(interp.field(&leaf, "y").unwrap().as_int(), Some(2));
}

#[test]
fn test_underscored_names_get_distinct_setters() {
    let mut model = ClassHierarchy::new();
    model.push(
        ClassModel::new("a.Pair")
            .field(FieldModel::new("a_b", ElementType::int()))
            .field(FieldModel::new("aB", ElementType::int())),
    );
    let ctx = generate(model, PolicyKind::Mutable);
    assert_eq!(
        method_names(&ctx.code, "a.Pair.Builder"),
        vec!["withA_b", "withAB", "init", "build"]
    );

    let interp = Interpreter::new(&ctx.code);
    let builder = interp.call_static("a.Pair", "builder", vec![]).unwrap();
    let builder = interp.call(&builder, "withA_b", vec![Typed::int(1)]).unwrap();
    let builder = interp.call(&builder, "withAB", vec![Typed::int(2)]).unwrap();
    let pair = interp.call(&builder, "build", vec![]).unwrap();
    assert_eq!(interp.field(&pair, "a_b").unwrap().as_int(), Some(1));
    assert_eq!(interp.field(&pair, "aB").unwrap().as_int(), Some(2));
}

#[test]
fn test_collision_is_isolated() {
    let mut model = ClassHierarchy::new();
    model.push(
        ClassModel::new("a.A")
            .nested("Builder")
            .field(FieldModel::new("x", ElementType::int())),
    );
    model.push(ClassModel::new("a.B").field(FieldModel::new("y", ElementType::string())));
    let ctx = generate(model, PolicyKind::Mutable);

    let warnings: Vec<_> = ctx.warnings().collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(
        warnings[0].message,
        "Class \"a.A\" already contains inner class \"Builder\". Skipping generation of fluent builder."
    );
    assert!(ctx.registry.as_ref().unwrap().get("a.A").is_none());
    assert!(method_names(&ctx.code, "a.A.Builder").is_empty());

    let interp = Interpreter::new(&ctx.code);
    assert!(interp.call_static("a.A", "builder", vec![]).is_err());
    let builder = interp.call_static("a.B", "builder", vec![]).unwrap();
    let builder = interp.call(&builder, "withY", vec![Typed::string("ok")]).unwrap();
    let b = interp.call(&builder, "build", vec![]).unwrap();
    assert_eq!(interp.field(&b, "y").unwrap().as_str(), Some("ok"));
}

#[test]
fn test_skipped_superclass_builder_falls_back_to_nearest() {
    let mut model = ClassHierarchy::new();
    let base = model.push(ClassModel::new("a.Base").field(FieldModel::new("id", ElementType::int())));
    let mid = model.push(
        ClassModel::new("a.Mid")
            .extends(base)
            .nested("Builder")
            .field(FieldModel::new("name", ElementType::string())),
    );
    model.push(
        ClassModel::new("a.Leaf")
            .extends(mid)
            .field(FieldModel::new("size", ElementType::long())),
    );
    let ctx = generate(model, PolicyKind::Mutable);

    let leaf_builder = ctx.code.lookup("a.Leaf.Builder").unwrap();
    assert_eq!(
        ctx.code.get(leaf_builder).extends,
        ctx.code.lookup("a.Base.Builder")
    );

    let interp = Interpreter::new(&ctx.code);
    let builder = interp.call_static("a.Leaf", "builder", vec![]).unwrap();
    let builder = interp.call(&builder, "withId", vec![Typed::int(1)]).unwrap();
    let builder = interp.call(&builder, "withSize", vec![Typed::long(9)]).unwrap();
    assert!(interp.call(&builder, "withName", vec![Typed::string("n")]).is_err());
    let leaf = interp.call(&builder, "build", vec![]).unwrap();
    assert_eq!(interp.field(&leaf, "id").unwrap().as_int(), Some(1));
    assert_eq!(interp.field(&leaf, "size").unwrap().as_int(), Some(9));
}

#[test]
fn test_missing_override_breaks_chaining() {
    let mut ctx = generate(chain(), PolicyKind::Mutable);
    let leaf_builder = ctx.code.lookup("a.Leaf.Builder").unwrap();
    ctx.code
        .get_mut(leaf_builder)
        .methods
        .retain(|m| m.name != "withId");
    let interp = Interpreter::new(&ctx.code);

    let builder = interp.call_static("a.Leaf", "builder", vec![]).unwrap();
    // Mid's override is now the nearest, so the chain degrades to Mid.Builder.
    let builder = interp.call(&builder, "withId", vec![Typed::int(1)]).unwrap();
    assert_eq!(builder.ty, builder_ty("a.Mid"));

    let err = interp
        .call(&builder, "withTags", vec![Typed::string("x")])
        .unwrap_err();
    assert!(matches!(err, InterpError::NoSuchMethod { .. }));
    assert_eq!(
        err.to_string(),
        "no method withTags(string) applicable in 'a.Mid.Builder'"
    );
}

#[test]
fn test_mutable_policy_shares_lists() {
    let ctx = generate(orders(), PolicyKind::Mutable);
    let interp = Interpreter::new(&ctx.code);

    let lines = Typed::string_list(&["apple"]);
    let builder = interp.call_static("shop.Order", "builder", vec![]).unwrap();
    let builder = interp.call(&builder, "withLines", vec![lines.clone()]).unwrap();
    let order = interp.call(&builder, "build", vec![]).unwrap();

    let stored = interp.field(&order, "lines").unwrap();
    assert!(stored.same(&lines.value));
    lines.value.as_list().unwrap().push(RtValue::str("pear")).unwrap();
    assert_eq!(stored.strings(), Some(vec!["apple".into(), "pear".into()]));
}

#[test]
fn test_immutable_policy_copies_and_freezes_lists() {
    let ctx = generate(orders(), PolicyKind::Immutable);
    let interp = Interpreter::new(&ctx.code);

    let lines = Typed::string_list(&["apple"]);
    let builder = interp.call_static("shop.Order", "builder", vec![]).unwrap();
    let builder = interp.call(&builder, "withLines", vec![lines.clone()]).unwrap();
    lines.value.as_list().unwrap().push(RtValue::str("late")).unwrap();
    let order = interp.call(&builder, "build", vec![]).unwrap();

    let stored = interp.field(&order, "lines").unwrap();
    let stored = stored.as_list().unwrap();
    assert!(stored.is_read_only());
    assert!(!stored.shares_storage(lines.value.as_list().unwrap()));
    assert_eq!(RtValue::List(stored.clone()).strings(), Some(vec!["apple".into()]));
    assert!(matches!(
        stored.push(RtValue::str("x")),
        Err(InterpError::ReadOnlyList)
    ));
}

#[test]
fn test_immutable_policy_preserves_null() {
    let ctx = generate(orders(), PolicyKind::Immutable);
    let interp = Interpreter::new(&ctx.code);

    let builder = interp.call_static("shop.Order", "builder", vec![]).unwrap();
    let builder = interp.call(&builder, "withLines", vec![Typed::null()]).unwrap();
    let order = interp.call(&builder, "build", vec![]).unwrap();
    assert!(interp.field(&order, "lines").unwrap().is_null());
}

#[test]
fn test_properties_recorded_once() {
    let model = chain();
    let mut code = declare_products(&model);
    let registry = BuilderRegistry::build(&model, &mut code, "Builder").unwrap();
    generate_builders(&model, &registry, &DirectAssignment, &mut code).unwrap();
    let leaf = registry.get("a.Leaf").unwrap();

    // A second pass into an untouched model declares every member again and
    // only fails when recording the properties.
    let mut fresh = declare_products(&model);
    BuilderRegistry::build(&model, &mut fresh, "Builder").unwrap();
    let err = BuilderGenerator::new(&model, &registry, &DirectAssignment, leaf)
        .build_properties(&mut fresh)
        .unwrap_err();
    assert!(err.to_string().contains("already populated"), "{err}");

    let names: Vec<_> = leaf
        .properties()
        .unwrap()
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["tags"]);
}

#[test]
fn test_every_class_gets_a_descriptor_before_generation() {
    let model = chain();
    let mut code = declare_products(&model);

    let registry = BuilderRegistry::build(&model, &mut code, "Builder").unwrap();
    assert_eq!(registry.len(), model.len());
    assert!(registry.iter().all(|(_, d)| d.properties().is_none()));

    let count = generate_builders(&model, &registry, &DefensiveCopy, &mut code).unwrap();
    assert_eq!(count, 3);
    let leaf = registry.for_class(&model, ClassId(2)).unwrap();
    assert!(code.get(leaf.builder).extends.is_some());
}
