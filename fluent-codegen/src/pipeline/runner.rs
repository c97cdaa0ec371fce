//! Pipeline orchestrator.

use eyre::Result;
use fluent_manifest::Manifest;
use fluent_model::ClassHierarchy;
use tracing::{debug, debug_span};

use super::{
    CompilationContext, GeneratorConfig, Phase, Plugin,
    phases::{DeclarePhase, GeneratePhase, LowerPhase, RegisterPhase},
};

/// The compilation pipeline orchestrator.
///
/// The pipeline manages the execution of compilation phases and plugin hooks.
/// It runs built-in phases (lower, declare, register, generate) followed by
/// any user phases, calling plugin hooks before and after each phase.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .plugin(MyPlugin::new())
///     .phase(MyCustomPhase);
///
/// let ctx = pipeline.run(manifest)?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a new pipeline with default built-in phases.
    pub fn new() -> Self {
        Self {
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run the pipeline on a manifest.
    ///
    /// Executes all phases in order:
    /// 1. LowerPhase - manifest to class hierarchy and config
    /// 2. DeclarePhase - product classes into the code model
    /// 3. RegisterPhase - one empty builder per class
    /// 4. GeneratePhase - builder members
    /// 5. User phases (if any)
    ///
    /// Plugin hooks are called before and after each phase.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally.
    pub fn run(&self, manifest: Manifest) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(manifest);
        self.run_phases(Some(&LowerPhase), &mut ctx)?;
        Ok(ctx)
    }

    /// Run the pipeline on an already built class hierarchy, skipping
    /// LowerPhase.
    pub fn run_model(
        &self,
        model: ClassHierarchy,
        config: GeneratorConfig,
    ) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::from_model(model, config);
        self.run_phases(None, &mut ctx)?;
        Ok(ctx)
    }

    fn run_phases(&self, lower: Option<&dyn Phase>, ctx: &mut CompilationContext) -> Result<()> {
        let mut phases: Vec<&dyn Phase> = Vec::with_capacity(4 + self.phases.len());
        if let Some(lower) = lower {
            phases.push(lower);
        }
        phases.push(&DeclarePhase);
        phases.push(&RegisterPhase);
        phases.push(&GeneratePhase);
        for phase in &self.phases {
            phases.push(phase.as_ref());
        }

        for phase in phases {
            self.run_phase(phase, ctx)?;
        }
        Ok(())
    }

    /// Run a single phase with plugin hooks.
    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();
        let _span = debug_span!("phase", name = phase_name).entered();

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;
        debug!(
            description = phase.description(),
            diagnostics = ctx.diagnostics.len(),
            "phase complete"
        );

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
