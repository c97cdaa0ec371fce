//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from builder generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Number of classes in the manifest.
    pub class_count: usize,
    /// Number of builders generated.
    pub builder_count: usize,
    /// Name of the property policy in effect.
    pub policy: String,
    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,
    /// Class tree display string.
    pub class_tree: String,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Paths written, relative to the output directory.
    pub written: Vec<String>,
    /// Number of files whose content was already current.
    pub unchanged: usize,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        for warning in &self.warnings {
            out.warning(&format!("warning: {}", warning));
        }

        out.section(&format!("Classes ({})", self.class_count));
        out.preformatted(&self.class_tree);
        out.newline();

        out.key_value("Policy", &self.policy);
        out.key_value("Builders", &self.builder_count.to_string());
        out.key_value("Generated", &written.output_dir.display().to_string());

        if !written.written.is_empty() {
            out.newline();
            out.section("Written");
            for path in &written.written {
                out.added_item(path);
            }
        }
        if written.unchanged > 0 {
            out.newline();
            out.preformatted(&format!("{} files unchanged", written.unchanged));
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for warning in &self.warnings {
            out.warning(&format!("warning: {}", warning));
        }

        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
        for file in &preview.files {
            out.list_item(&file.path);
        }
    }
}
