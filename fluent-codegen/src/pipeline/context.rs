//! Compilation context passed through pipeline phases.

use eyre::{Result, eyre};
use fluent_manifest::Manifest;
use fluent_model::ClassHierarchy;

use super::{
    GeneratorConfig,
    diagnostic::{Diagnostic, Severity},
};
use crate::{code_model::CodeModel, generation::BuilderRegistry};

/// Context passed through all pipeline phases.
///
/// This struct carries the state of one generation run through each phase,
/// accumulating results and diagnostics along the way.
#[derive(Debug)]
pub struct CompilationContext {
    /// The manifest being compiled; absent when the run starts from a model.
    pub manifest: Option<Manifest>,
    /// Settings for this run (populated from the manifest by LowerPhase).
    pub config: GeneratorConfig,
    /// The class hierarchy (populated by LowerPhase).
    pub model: Option<ClassHierarchy>,
    /// Declared types and their members.
    pub code: CodeModel,
    /// Builder descriptors (populated by RegisterPhase).
    pub registry: Option<BuilderRegistry>,
    /// Number of builders filled by GeneratePhase.
    pub generated: usize,
    /// Diagnostics collected during compilation.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    /// Create a new compilation context from a manifest.
    pub fn new(manifest: Manifest) -> Self {
        Self {
            manifest: Some(manifest),
            config: GeneratorConfig::default(),
            model: None,
            code: CodeModel::new(),
            registry: None,
            generated: 0,
            diagnostics: Vec::new(),
        }
    }

    /// Create a context for an already built class hierarchy.
    pub fn from_model(model: ClassHierarchy, config: GeneratorConfig) -> Self {
        Self {
            manifest: None,
            config,
            model: Some(model),
            code: CodeModel::new(),
            registry: None,
            generated: 0,
            diagnostics: Vec::new(),
        }
    }

    /// The class hierarchy, or an error if LowerPhase hasn't run.
    pub fn hierarchy(&self) -> Result<&ClassHierarchy> {
        self.model
            .as_ref()
            .ok_or_else(|| eyre!("class model not set - did LowerPhase run?"))
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    /// Count the number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Count the number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Add an error diagnostic.
    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    /// Add a warning diagnostic.
    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    /// Add an info diagnostic.
    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    /// Add a diagnostic with a location.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Get all error diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_manifest() -> Manifest {
        r#"
            [generator]
            package = "com.acme"

            [[class]]
            name = "Order"
        "#
        .parse()
        .unwrap()
    }

    #[test]
    fn test_context_creation() {
        let ctx = CompilationContext::new(make_test_manifest());

        assert!(ctx.model.is_none());
        assert!(ctx.registry.is_none());
        assert!(ctx.code.is_empty());
        assert!(ctx.diagnostics.is_empty());
        assert!(ctx.hierarchy().is_err());
    }

    #[test]
    fn test_context_diagnostics() {
        let mut ctx = CompilationContext::new(make_test_manifest());

        ctx.add_error("test", "test error");
        ctx.add_warning("test", "test warning");

        assert!(ctx.has_errors());
        assert!(ctx.has_warnings());
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.warning_count(), 1);
    }

    #[test]
    fn test_context_no_errors() {
        let mut ctx = CompilationContext::from_model(ClassHierarchy::new(), GeneratorConfig::default());

        ctx.add_warning("test", "just a warning");
        ctx.add_info("test", "just info");

        assert!(!ctx.has_errors());
        assert!(ctx.has_warnings());
        assert!(ctx.hierarchy().is_ok());
    }
}
