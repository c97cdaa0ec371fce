//! Declare phase - puts the product classes into the code model.
//!
//! This is where a host compiler would already have the classes; the
//! builder generator only ever adds to what is declared here.

use eyre::{Result, WrapErr};
use fluent_model::ClassModel;
use tracing::trace;

use crate::{
    builder::{FieldSpec, TypeRef, TypeSpec},
    code_model::{CodeModel, Emitter},
    pipeline::{CompilationContext, Diagnostic, Phase},
};

/// Phase that declares every class, its fields, and the nested types the
/// host already has.
pub struct DeclarePhase;

impl Phase for DeclarePhase {
    fn name(&self) -> &'static str {
        "declare"
    }

    fn description(&self) -> &'static str {
        "Declare product classes in the code model"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let model = ctx.hierarchy()?;
        let mut code = CodeModel::new();
        let mut diagnostics = Vec::new();

        for (_, class) in model.iter() {
            declare_class(&mut code, class, &mut diagnostics)
                .wrap_err_with(|| format!("declaring class '{}'", class.name))?;
        }

        for (id, class) in model.iter() {
            let Some(superclass) = model.superclass(id) else {
                continue;
            };
            let (Some(ty), Some(sup)) = (
                code.find_type(&class.name),
                code.find_type(&model.class(superclass).name),
            ) else {
                continue;
            };
            code.set_extends(ty, sup);
        }

        ctx.code = code;
        ctx.diagnostics.extend(diagnostics);
        Ok(())
    }
}

fn declare_class(
    code: &mut CodeModel,
    class: &ClassModel,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<()> {
    let mut spec = TypeSpec::class(class.simple_name()).abstract_(class.is_abstract);
    if let Some(doc) = &class.doc {
        spec = spec.doc(doc);
    }
    let ty = code.declare_class(&class.name, spec)?;
    trace!(class = %class.name, "declared product");

    for field in &class.fields {
        let mut spec = FieldSpec::new(&field.name, TypeRef::from_field(&field.ty, field.cardinality))
            .protected()
            .static_(field.is_static);
        if let Some(doc) = &field.doc {
            spec = spec.doc(doc);
        }
        code.declare_field(ty, spec)?;
    }

    for nested in &class.nested {
        if let Err(conflict) = code.declare_nested_type(ty, TypeSpec::class(nested).static_()) {
            let mut diagnostic = Diagnostic::warning("declare", conflict.to_string())
                .for_class(&class.name);
            if let Some(location) = &class.location {
                diagnostic = diagnostic.at(location.to_string());
            }
            diagnostics.push(diagnostic);
        }
    }
    Ok(())
}
