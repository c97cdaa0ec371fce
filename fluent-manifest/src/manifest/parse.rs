//! Manifest parsing from files and strings.

use std::{collections::HashMap, path::Path, str::FromStr};

use fluent_model::{PrimitiveType, SourceLocation, property_stem};

use super::{Manifest, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "fluent.toml")
    }
}

impl Manifest {
    /// Parse a fluent.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a fluent.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let mut manifest: Manifest =
        toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;

    validate_manifest(&manifest, content, filename)?;

    for class in &mut manifest.classes {
        class.location = Some(SourceLocation::from_offset(
            filename,
            content,
            class.name.span().start,
        ));
    }
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);
    let source = ctx.source_context();

    if let Some(package) = &manifest.generator.package {
        if !package.is_empty() {
            ctx.validate_qualified_name(package, "package", 0..0)
                .map_err(|_| source.validation_error(format!("invalid package '{package}'"), None))?;
        }
    }
    if ctx
        .validate_name(&manifest.generator.builder_name, "builder", 0..0)
        .is_err()
    {
        return Err(source.validation_error(
            format!(
                "invalid builder-name '{}'",
                manifest.generator.builder_name
            ),
            None,
        ));
    }

    // Names and duplicates first so superclass and type lookups can rely on them.
    let mut seen: HashMap<String, std::ops::Range<usize>> = HashMap::new();
    for class in &manifest.classes {
        let span = class.name.span();
        ctx.validate_qualified_name(class.name(), "class", span.clone())?;

        let qualified = manifest.qualify(class.name());
        if let Some(first) = seen.get(&qualified) {
            return Err(source.duplicate_class_error(qualified, first.clone(), span));
        }
        seen.insert(qualified, span);
    }

    for class in &manifest.classes {
        let class_ctx = ctx.push(class.name());

        if let Some(extends) = &class.extends {
            if !manifest.has_class(extends.get_ref()) {
                return Err(source.unknown_superclass_error(
                    extends.get_ref(),
                    class.name(),
                    extends.span(),
                ));
            }
        }

        let mut fields: HashMap<&str, std::ops::Range<usize>> = HashMap::new();
        for field in &class.fields {
            let span = field.name.span();
            class_ctx.validate_name(field.name(), "field", span.clone())?;

            if let Some(first) = fields.get(field.name()) {
                return Err(source.duplicate_field_error(
                    class.name(),
                    field.name(),
                    first.clone(),
                    span,
                ));
            }
            fields.insert(field.name(), span);

            let known = field.type_expr().is_some_and(|ty| {
                PrimitiveType::from_name(ty.element).is_some()
                    || manifest.has_class(ty.element)
                    || is_external_type(ty.element)
            });
            if !known {
                return Err(source.unknown_type_error(
                    field.ty.get_ref(),
                    field.name(),
                    field.ty.span(),
                ));
            }
        }
    }

    check_cycles(manifest, source)?;
    check_property_clashes(manifest, source)
}

/// A dotted name not declared in the manifest refers to an existing class.
fn is_external_type(name: &str) -> bool {
    name.contains('.')
        && name
            .split('.')
            .all(|segment| super::validate::validate_identifier(segment).is_none())
}

fn check_cycles(manifest: &Manifest, source: &SourceContext) -> Result<()> {
    for class in &manifest.classes {
        let start = manifest.qualify(class.name());
        let mut chain = vec![start.clone()];
        let mut current = class;

        while let Some(extends) = &current.extends {
            let Some(parent) = manifest.find_class(extends.get_ref()) else {
                break;
            };
            let parent_name = manifest.qualify(parent.name());
            if parent_name == start {
                chain.push(parent_name);
                return Err(source.inheritance_cycle_error(
                    class.name(),
                    chain.join(" -> "),
                    extends.span(),
                ));
            }
            if chain.contains(&parent_name) {
                // Cycle not through `class`; reported when its members are visited.
                break;
            }
            chain.push(parent_name);
            current = parent;
        }
    }
    Ok(())
}

/// Instance fields visible from one class must map to distinct setters, so
/// a class may neither shadow an inherited field nor declare two fields
/// differing only in the case of their first letter. Runs after
/// `check_cycles`, so every superclass chain ends.
fn check_property_clashes(manifest: &Manifest, source: &SourceContext) -> Result<()> {
    for class in &manifest.classes {
        let mut chain = vec![class];
        let mut current = class;
        while let Some(parent) = current.extends().and_then(|name| manifest.find_class(name)) {
            chain.push(parent);
            current = parent;
        }

        let mut stems: HashMap<String, (&str, &str, std::ops::Range<usize>)> = HashMap::new();
        for owner in chain.iter().rev() {
            for field in owner.fields.iter().filter(|f| !f.is_static) {
                let stem = property_stem(field.name());
                let span = field.name.span();
                if let Some((first_owner, first_name, first)) = stems.get(&stem) {
                    return Err(source.property_clash_error(
                        owner.name(),
                        field.name(),
                        *first_owner,
                        *first_name,
                        stem,
                        first.clone(),
                        span,
                    ));
                }
                stems.insert(stem, (owner.name(), field.name(), span));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use fluent_model::Cardinality;

    use super::*;
    use crate::Policy;

    const CHAIN: &str = r#"
[generator]
package = "com.acme"
policy = "immutable"

[[class]]
name = "Base"
abstract = true

[[class.field]]
name = "id"
type = "int"

[[class]]
name = "Mid"
extends = "Base"

[[class.field]]
name = "name"
type = "string"

[[class]]
name = "Leaf"
extends = "Mid"
doc = "A leaf"

[[class.field]]
name = "tags"
type = "string[]"

[[class.field]]
name = "COUNT"
type = "int"
static = true
"#;

    #[test]
    fn test_parse_chain() {
        let manifest: Manifest = CHAIN.parse().unwrap();
        assert_eq!(manifest.generator.policy, Policy::Immutable);
        assert_eq!(manifest.generator.builder_name, "Builder");
        assert_eq!(manifest.classes.len(), 3);

        let leaf = &manifest.classes[2];
        assert_eq!(manifest.qualify(leaf.name()), "com.acme.Leaf");
        assert_eq!(leaf.extends(), Some("Mid"));
        assert_eq!(leaf.doc.as_deref(), Some("A leaf"));
        assert_eq!(
            leaf.fields[0].type_expr().unwrap().cardinality,
            Cardinality::Array
        );
        assert!(leaf.fields[1].is_static);
    }

    #[test]
    fn test_locations_filled() {
        let manifest: Manifest = CHAIN.parse().unwrap();
        let base = manifest.classes[0].location.as_ref().unwrap();
        assert_eq!(base.file, "fluent.toml");
        assert_eq!(base.line, 7);
    }

    #[test]
    fn test_empty_manifest() {
        let manifest: Manifest = "".parse().unwrap();
        assert!(manifest.classes.is_empty());
        assert_eq!(manifest.generator.policy, Policy::Mutable);
    }

    #[test]
    fn test_syntax_error() {
        let err = "[[class]\nname = 1".parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = "[[class]]\nname = \"A\"\nsuper = \"B\"\n"
            .parse::<Manifest>()
            .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_reserved_class_name() {
        let err = "[[class]]\nname = \"class\"\n"
            .parse::<Manifest>()
            .unwrap_err();
        assert!(matches!(*err, Error::ReservedKeyword { .. }));
    }

    #[test]
    fn test_invalid_field_name() {
        let src = "[[class]]\nname = \"A\"\n[[class.field]]\nname = \"first-name\"\ntype = \"string\"\n";
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_unknown_type() {
        let src = "[[class]]\nname = \"A\"\n[[class.field]]\nname = \"x\"\ntype = \"integer\"\n";
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::UnknownType { .. }));
    }

    #[test]
    fn test_class_and_external_types_accepted() {
        let src = r#"
[[class]]
name = "Address"

[[class]]
name = "Person"

[[class.field]]
name = "home"
type = "Address"

[[class.field]]
name = "others"
type = "list<Address>"

[[class.field]]
name = "born"
type = "java.time.LocalDate"
"#;
        let manifest: Manifest = src.parse().unwrap();
        assert_eq!(manifest.classes[1].fields.len(), 3);
    }

    #[test]
    fn test_unknown_superclass() {
        let err = "[[class]]\nname = \"A\"\nextends = \"Missing\"\n"
            .parse::<Manifest>()
            .unwrap_err();
        assert!(matches!(*err, Error::UnknownSuperclass { .. }));
    }

    #[test]
    fn test_duplicate_class() {
        let err = "[[class]]\nname = \"A\"\n[[class]]\nname = \"A\"\n"
            .parse::<Manifest>()
            .unwrap_err();
        assert!(matches!(*err, Error::DuplicateClass { .. }));
    }

    #[test]
    fn test_duplicate_class_after_qualification() {
        let src = "[generator]\npackage = \"p\"\n[[class]]\nname = \"A\"\n[[class]]\nname = \"p.A\"\n";
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::DuplicateClass { .. }));
    }

    #[test]
    fn test_duplicate_field() {
        let src = r#"
[[class]]
name = "A"

[[class.field]]
name = "x"
type = "int"

[[class.field]]
name = "x"
type = "long"
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::DuplicateField { .. }));
    }

    #[test]
    fn test_shadowed_field_rejected() {
        let src = r#"
[[class]]
name = "Base"

[[class.field]]
name = "x"
type = "int"

[[class]]
name = "Leaf"
extends = "Base"

[[class.field]]
name = "x"
type = "string"

[[class.field]]
name = "y"
type = "int"
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        match *err {
            Error::PropertyClash {
                class,
                name,
                owner,
                stem,
                ..
            } => {
                assert_eq!(class, "Leaf");
                assert_eq!(name, "x");
                assert_eq!(owner, "Base");
                assert_eq!(stem, "X");
            }
            other => panic!("expected property clash, got {other:?}"),
        }
    }

    #[test]
    fn test_shadowing_through_grandparent_rejected() {
        let src = r#"
[[class]]
name = "Base"
abstract = true

[[class.field]]
name = "id"
type = "int"

[[class]]
name = "Mid"
extends = "Base"

[[class]]
name = "Leaf"
extends = "Mid"

[[class.field]]
name = "Id"
type = "long"
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::PropertyClash { .. }));
        assert_eq!(
            err.to_string(),
            "field 'Id' of class 'Leaf' clashes with field 'id' of class 'Base'"
        );
    }

    #[test]
    fn test_first_letter_case_clash_rejected() {
        let src = "[[class]]\nname = \"A\"\n[[class.field]]\nname = \"x\"\ntype = \"int\"\n[[class.field]]\nname = \"X\"\ntype = \"int\"\n";
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::PropertyClash { .. }));
    }

    #[test]
    fn test_distinct_setter_names_accepted() {
        let src = r#"
[[class]]
name = "Base"

[[class.field]]
name = "VERSION"
type = "int"
static = true

[[class]]
name = "Leaf"
extends = "Base"

[[class.field]]
name = "a_b"
type = "int"

[[class.field]]
name = "aB"
type = "int"

[[class.field]]
name = "vERSION"
type = "int"
"#;
        let manifest: Manifest = src.parse().unwrap();
        assert_eq!(manifest.classes[1].fields.len(), 3);
    }

    #[test]
    fn test_inheritance_cycle() {
        let src = r#"
[[class]]
name = "A"
extends = "B"

[[class]]
name = "B"
extends = "A"
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        match *err {
            Error::InheritanceCycle { chain, .. } => assert_eq!(chain, "A -> B -> A"),
            other => panic!("expected cycle error, got {other:?}"),
        }
    }

    #[test]
    fn test_self_extension_is_cycle() {
        let err = "[[class]]\nname = \"A\"\nextends = \"A\"\n"
            .parse::<Manifest>()
            .unwrap_err();
        assert!(matches!(*err, Error::InheritanceCycle { .. }));
    }

    #[test]
    fn test_invalid_builder_name() {
        let err = "[generator]\nbuilder-name = \"my builder\"\n"
            .parse::<Manifest>()
            .unwrap_err();
        assert!(err.to_string().contains("builder-name"));
    }
}
