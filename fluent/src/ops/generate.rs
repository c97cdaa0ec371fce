//! Generate operation - builders from a manifest.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use fluent_codegen::pipeline::Pipeline;
use fluent_codegen_java::{Generator, LanguageCodegen};
use fluent_manifest::{Manifest, Policy};
use tracing::info;

use super::class_tree;
use crate::reports::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory relative paths from the manifest resolve against.
    pub base_dir: &'a Path,
    /// Output root; overrides `[generator] output`.
    pub output: Option<&'a Path>,
    /// Overrides `[generator] policy`.
    pub policy: Option<Policy>,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Command-line overrides are applied to the manifest before the pipeline
/// runs, so every phase sees the same settings.
pub fn generate(mut manifest: Manifest, opts: GenerateOptions) -> Result<GenerateReport> {
    if let Some(policy) = opts.policy {
        manifest.generator.policy = policy;
    }
    if let Some(output) = opts.output {
        manifest.generator.output = Some(output.to_path_buf());
    }

    let ctx = Pipeline::new().run(manifest).wrap_err("Pipeline failed")?;
    let warnings = ctx.warnings().map(|diag| diag.describe()).collect();
    let model = ctx.hierarchy()?;

    let generator = Generator::from_context(&ctx);
    let result = if opts.dry_run {
        let files = generator
            .preview()
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let output_dir = resolve_output(opts.base_dir, ctx.config.output.as_deref(), opts.output);
        let written = generator
            .generate(&output_dir)
            .wrap_err("Failed to write generated sources")?;
        info!(
            written = written.written.len(),
            unchanged = written.unchanged.len(),
            "generation finished"
        );
        GenerationResult::Written(WrittenResult {
            output_dir,
            written: written.written,
            unchanged: written.unchanged.len(),
        })
    };

    Ok(GenerateReport {
        class_count: model.len(),
        builder_count: ctx.generated,
        policy: ctx.config.policy.policy().name().to_string(),
        class_tree: class_tree(model, "  "),
        warnings,
        result,
    })
}

/// A command-line output is taken as given; one from the manifest is
/// relative to the manifest's directory.
fn resolve_output(base_dir: &Path, configured: Option<&Path>, cli: Option<&Path>) -> PathBuf {
    match (cli, configured) {
        (Some(cli), _) => cli.to_path_buf(),
        (None, Some(configured)) => base_dir.join(configured),
        (None, None) => base_dir.to_path_buf(),
    }
}
