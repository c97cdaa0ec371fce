//! Generate phase - Phase 2 of builder generation.

use eyre::{Result, eyre};

use crate::{
    generation::generate_builders,
    pipeline::{CompilationContext, Phase},
};

/// Phase that fills every registered builder using the configured policy.
pub struct GeneratePhase;

impl Phase for GeneratePhase {
    fn name(&self) -> &'static str {
        "generate"
    }

    fn description(&self) -> &'static str {
        "Generate builder members"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let model = ctx
            .model
            .as_ref()
            .ok_or_else(|| eyre!("class model not set - did LowerPhase run?"))?;
        let registry = ctx
            .registry
            .as_ref()
            .ok_or_else(|| eyre!("builder registry not set - did RegisterPhase run?"))?;

        let policy = ctx.config.policy.policy();
        let generated = generate_builders(model, registry, policy, &mut ctx.code)?;

        ctx.generated = generated;
        ctx.add_info(
            self.name(),
            format!("generated {} builders ({})", generated, policy.name()),
        );
        Ok(())
    }
}
