//! Test utilities for builder generation.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.
//!
//! - [`Interpreter`] runs the emitted code model, so the behaviour of
//!   generated builders can be asserted without a Java toolchain.
//! - [`CompileChecker`] runs a real compiler over rendered output.

mod interpreter;
mod value;

use std::{
    path::{Path, PathBuf},
    process::Command,
};

use eyre::{Result, eyre};

pub use interpreter::{InterpError, Interpreter};
pub use value::{Instance, ListRef, RtValue, Typed};

/// Error from compile checking.
#[derive(Debug)]
pub struct CompileError {
    pub message: String,
    pub output: String,
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n\nOutput:\n{}", self.message, self.output)
    }
}

impl std::error::Error for CompileError {}

/// Trait for verifying generated code compiles.
pub trait CompileChecker {
    /// Check that the sources in the given directory compile.
    fn check(&self, dir: &Path) -> Result<(), CompileError>;
}

/// Java compile checker using `javac`.
///
/// Compiles every `.java` file under the directory into a scratch output
/// directory next to the sources.
pub struct JavaChecker;

impl CompileChecker for JavaChecker {
    fn check(&self, dir: &Path) -> Result<(), CompileError> {
        let sources = java_sources(dir).map_err(|e| CompileError {
            message: format!("Failed to list sources: {}", e),
            output: String::new(),
        })?;
        if sources.is_empty() {
            return Err(CompileError {
                message: "no .java files to compile".to_string(),
                output: String::new(),
            });
        }

        let output = Command::new("javac")
            .arg("-d")
            .arg(dir.join(".classes"))
            .args(&sources)
            .output()
            .map_err(|e| CompileError {
                message: format!("Failed to run javac: {}", e),
                output: String::new(),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            Err(CompileError {
                message: "javac failed".to_string(),
                output: format!("stderr:\n{}\n\nstdout:\n{}", stderr, stdout),
            })
        }
    }
}

fn java_sources(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut sources = Vec::new();
    let mut pending = vec![dir.to_path_buf()];
    while let Some(current) = pending.pop() {
        for entry in std::fs::read_dir(&current)? {
            let path = entry?.path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "java") {
                sources.push(path);
            }
        }
    }
    sources.sort();
    Ok(sources)
}

/// Generate code into a temporary directory and return the path.
///
/// The directory will be cleaned up when the returned `TempDir` is dropped.
pub fn generate_to_temp<F>(generate: F) -> Result<tempfile::TempDir>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let temp_dir = tempfile::TempDir::new()?;
    generate(temp_dir.path())?;
    Ok(temp_dir)
}

/// Helper to run a generator and check that its output compiles.
pub fn assert_generates_valid_code<C>(
    generate: impl FnOnce(&Path) -> Result<()>,
    checker: &C,
) -> Result<()>
where
    C: CompileChecker,
{
    let temp_dir = generate_to_temp(generate)?;

    checker.check(temp_dir.path()).map_err(|e| {
        eprintln!("Generated files in {}:", temp_dir.path().display());
        if let Ok(sources) = java_sources(temp_dir.path()) {
            for path in sources {
                eprintln!("  {}", path.display());
            }
        }
        eyre!("Compile check failed: {}", e)
    })?;

    Ok(())
}
