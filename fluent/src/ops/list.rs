//! List operation - the class tree of a manifest.

use eyre::Result;
use fluent_codegen::pipeline::phases::lower_manifest;
use fluent_manifest::Manifest;
use fluent_model::{Cardinality, ClassHierarchy, ClassId, FieldModel};

use crate::reports::ListReport;

/// Lower the manifest and describe its classes.
pub fn list(manifest: &Manifest, json: bool) -> Result<ListReport> {
    let model = lower_manifest(manifest)?;
    let json = if json {
        Some(serde_json::to_string_pretty(&model)?)
    } else {
        None
    };
    Ok(ListReport {
        class_count: model.len(),
        tree: class_tree(&model, "  "),
        json,
    })
}

/// Indented class tree: roots in declaration order, each subclass one level
/// below its superclass.
pub fn class_tree(model: &ClassHierarchy, indent: &str) -> String {
    let mut out = String::new();
    for root in model.roots() {
        write_class(model, root, indent, 0, &mut out);
    }
    out.truncate(out.trim_end().len());
    out
}

fn write_class(model: &ClassHierarchy, id: ClassId, indent: &str, depth: usize, out: &mut String) {
    let class = model.class(id);
    out.push_str(indent);
    out.push_str(&"  ".repeat(depth));
    out.push_str(&class.name);
    if class.is_abstract {
        out.push_str(" (abstract)");
    }
    if !class.fields.is_empty() {
        let fields: Vec<String> = class.fields.iter().map(describe_field).collect();
        out.push_str(&format!(" {{ {} }}", fields.join(", ")));
    }
    out.push('\n');

    for sub in model.subclasses(id) {
        write_class(model, sub, indent, depth + 1, out);
    }
}

fn describe_field(field: &FieldModel) -> String {
    let ty = match field.cardinality {
        Cardinality::Single => field.ty.to_string(),
        Cardinality::Array => format!("{}[]", field.ty),
        Cardinality::List => format!("list<{}>", field.ty),
    };
    let prefix = if field.is_static { "static " } else { "" };
    format!("{}{}: {}", prefix, field.name, ty)
}
