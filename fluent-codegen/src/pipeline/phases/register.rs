//! Register phase - Phase 1 of builder generation.

use eyre::Result;
use tracing::info;

use crate::{
    generation::BuilderRegistry,
    pipeline::{CompilationContext, Diagnostic, Phase},
};

/// Phase that declares an empty builder type inside every class.
///
/// A class whose builder name is taken is reported once as a warning and
/// left without a builder.
pub struct RegisterPhase;

impl Phase for RegisterPhase {
    fn name(&self) -> &'static str {
        "register"
    }

    fn description(&self) -> &'static str {
        "Declare one builder type per class"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let model = ctx
            .model
            .as_ref()
            .ok_or_else(|| eyre::eyre!("class model not set - did LowerPhase run?"))?;
        let registry = BuilderRegistry::build(model, &mut ctx.code, &ctx.config.builder_name)?;

        let warnings: Vec<Diagnostic> = registry
            .conflicts()
            .iter()
            .map(|conflict| {
                let diagnostic =
                    Diagnostic::warning(self.name(), conflict.message()).for_class(&conflict.name);
                match &conflict.location {
                    Some(location) => diagnostic.at(location.to_string()),
                    None => diagnostic,
                }
            })
            .collect();

        info!(
            builders = registry.len(),
            skipped = warnings.len(),
            "registered builders"
        );
        ctx.diagnostics.extend(warnings);
        ctx.registry = Some(registry);
        Ok(())
    }
}
