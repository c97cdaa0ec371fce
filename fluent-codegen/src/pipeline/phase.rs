//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// One step of a generation run.
///
/// The built-in order is lower, declare, register, generate. Registering
/// must finish for every class before generating starts for any, which is
/// why they are separate phases rather than one pass per class.
///
/// Phases added with [`Pipeline::phase`](super::Pipeline::phase) run after
/// the built-in ones and see the filled code model.
pub trait Phase: Send + Sync {
    /// Short name used in logs, diagnostics and plugin hooks.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Run this phase on the compilation context.
    ///
    /// Recoverable problems belong in `ctx.diagnostics`; an `Err` aborts
    /// the run.
    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}
