//! Check operation - manifest validation.

use std::path::Path;

use eyre::{Context, Result};
use fluent_codegen::pipeline::{Pipeline, Severity};
use fluent_manifest::Manifest;

use super::class_tree;
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the whole pipeline without writing files and returns its
/// diagnostics together with a summary of the hierarchy.
pub fn check(manifest: &Manifest, config_path: &Path) -> Result<CheckReport> {
    let ctx = Pipeline::new()
        .run(manifest.clone())
        .wrap_err("Validation failed")?;

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &ctx.diagnostics {
        let msg = diag.describe();
        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    let model = ctx.hierarchy()?;
    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        errors,
        warnings,
        infos,
        class_count: model.len(),
        builder_count: ctx.generated,
        class_tree: class_tree(model, "    "),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_reports_skipped_builder() {
        let manifest: Manifest = r#"
            [[class]]
            name = "Legacy"
            nested = ["Builder"]

            [[class]]
            name = "Fresh"
        "#
        .parse()
        .unwrap();

        let report = check(&manifest, Path::new("fluent.toml")).unwrap();

        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
        assert!(
            report.warnings[0]
                .starts_with("Class \"Legacy\" already contains inner class \"Builder\"")
        );
        assert!(report.warnings[0].contains("--> fluent.toml:"));
        assert_eq!(report.class_count, 2);
        assert_eq!(report.builder_count, 1);
    }
}
