//! Lower phase - turns the manifest into a class hierarchy.

use eyre::{Result, eyre};
use fluent_manifest::{ClassEntry, FieldEntry, Manifest};
use fluent_model::{ClassHierarchy, ClassModel, ElementType, FieldModel, PrimitiveType};

use crate::pipeline::{CompilationContext, GeneratorConfig, Phase};

/// Phase that lowers the manifest into the class model and run settings.
pub struct LowerPhase;

impl Phase for LowerPhase {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn description(&self) -> &'static str {
        "Transform manifest to class hierarchy"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let manifest = ctx
            .manifest
            .as_ref()
            .ok_or_else(|| eyre!("no manifest to lower"))?;

        ctx.config = GeneratorConfig::from_manifest(manifest);
        ctx.model = Some(lower_manifest(manifest)?);
        Ok(())
    }
}

/// Lower a validated manifest into a class hierarchy.
///
/// Classes keep manifest order. Names are qualified with the configured
/// package; superclasses are linked once every class exists, so a class
/// may extend one declared after it.
pub fn lower_manifest(manifest: &Manifest) -> Result<ClassHierarchy> {
    let mut hierarchy = ClassHierarchy::new();
    for entry in &manifest.classes {
        hierarchy.push(lower_class(manifest, entry)?);
    }

    for entry in &manifest.classes {
        let Some(extends) = entry.extends() else {
            continue;
        };
        let name = manifest.qualify(entry.name());
        let id = hierarchy
            .lookup(&name)
            .ok_or_else(|| eyre!("class '{}' vanished while lowering", name))?;
        let superclass = hierarchy
            .lookup(&manifest.qualify(extends))
            .ok_or_else(|| eyre!("class '{}' extends unknown class '{}'", name, extends))?;
        hierarchy.set_superclass(id, Some(superclass));
    }

    Ok(hierarchy)
}

fn lower_class(manifest: &Manifest, entry: &ClassEntry) -> Result<ClassModel> {
    let mut class = ClassModel::new(manifest.qualify(entry.name()));
    class.is_abstract = entry.is_abstract;
    class.doc = entry.doc.clone();
    class.location = entry.location.clone();
    class.nested = entry.nested.clone();
    for field in &entry.fields {
        class = class.field(lower_field(manifest, field)?);
    }
    Ok(class)
}

fn lower_field(manifest: &Manifest, entry: &FieldEntry) -> Result<FieldModel> {
    let expr = entry
        .type_expr()
        .ok_or_else(|| eyre!("field '{}' has an invalid type", entry.name()))?;

    let element = match PrimitiveType::from_name(expr.element) {
        Some(primitive) => ElementType::Primitive(primitive),
        None if manifest.has_class(expr.element) => {
            ElementType::named(manifest.qualify(expr.element))
        }
        None => ElementType::named(expr.element),
    };

    let mut field = FieldModel::new(entry.name(), element).cardinality(expr.cardinality);
    field.is_static = entry.is_static;
    field.doc = entry.doc.clone();
    Ok(field)
}

#[cfg(test)]
mod tests {
    use fluent_model::Cardinality;

    use super::*;

    fn lower(src: &str) -> ClassHierarchy {
        let manifest: Manifest = src.parse().unwrap();
        lower_manifest(&manifest).unwrap()
    }

    #[test]
    fn test_lower_qualifies_and_links() {
        let hierarchy = lower(
            r#"
            [generator]
            package = "com.acme"

            [[class]]
            name = "Leaf"
            extends = "Base"

            [[class]]
            name = "Base"
            abstract = true
            "#,
        );

        let leaf = hierarchy.lookup("com.acme.Leaf").unwrap();
        let base = hierarchy.lookup("com.acme.Base").unwrap();
        assert_eq!(hierarchy.superclass(leaf), Some(base));
        assert!(hierarchy.class(base).is_abstract);
        let location = hierarchy.class(leaf).location.as_ref().unwrap();
        assert_eq!((location.file.as_str(), location.line), ("fluent.toml", 6));
    }

    #[test]
    fn test_lower_field_types() {
        let hierarchy = lower(
            r#"
            [generator]
            package = "shop"

            [[class]]
            name = "Address"

            [[class]]
            name = "Customer"

            [[class.field]]
            name = "tags"
            type = "string[]"

            [[class.field]]
            name = "home"
            type = "Address"

            [[class.field]]
            name = "visits"
            type = "list<java.time.Instant>"

            [[class.field]]
            name = "count"
            type = "int"
            static = true
            "#,
        );

        let customer = hierarchy.class(hierarchy.lookup("shop.Customer").unwrap());
        let fields = &customer.fields;
        assert_eq!(fields[0].ty, ElementType::string());
        assert_eq!(fields[0].cardinality, Cardinality::Array);
        assert_eq!(fields[1].ty, ElementType::named("shop.Address"));
        assert_eq!(fields[2].ty, ElementType::named("java.time.Instant"));
        assert_eq!(fields[2].cardinality, Cardinality::List);
        assert!(fields[3].is_static);
        assert_eq!(customer.instance_fields().count(), 3);
    }

    #[test]
    fn test_lower_phase_sets_config() {
        let manifest: Manifest = r#"
            [generator]
            policy = "immutable"
        "#
        .parse()
        .unwrap();
        let mut ctx = CompilationContext::new(manifest);

        LowerPhase.run(&mut ctx).unwrap();

        assert_eq!(ctx.config.policy, crate::generation::PolicyKind::Immutable);
        assert!(ctx.hierarchy().unwrap().is_empty());
    }
}
