use std::path::Path;

use eyre::Result;
use fluent_codegen::{
    code_model::CodeModel,
    language::{GenerateResult, LanguageCodegen, PreviewFile},
    output::{FileEntry, FileSet},
    pipeline::CompilationContext,
};
use tracing::debug;

use crate::JavaFile;

/// Java generator: one source file per top-level type of the code model.
pub struct Generator<'a> {
    code: &'a CodeModel,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "java"
    }

    fn file_extension(&self) -> &'static str {
        "java"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.files().preview()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let stats = self.files().write_all(output_dir)?;
        debug!(
            written = stats.written,
            unchanged = stats.unchanged,
            dir = %output_dir.display(),
            "wrote java sources"
        );
        Ok(GenerateResult {
            written: stats.written_paths,
            unchanged: stats.unchanged_paths,
        })
    }
}

impl<'a> Generator<'a> {
    pub fn new(code: &'a CodeModel) -> Self {
        Self { code }
    }

    /// Generator over the code model of a finished pipeline run.
    pub fn from_context(ctx: &'a CompilationContext) -> Self {
        Self::new(&ctx.code)
    }

    fn files(&self) -> FileSet {
        let mut files = FileSet::new();
        for (id, _) in self.code.top_level() {
            let file = JavaFile::new(self.code, id);
            files.register(FileEntry::new(file.path(), file.render()));
        }
        files
    }
}
