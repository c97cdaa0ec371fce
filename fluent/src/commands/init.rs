use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result, bail};
use fluent_manifest::Manifest;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct InitCommand {
    /// Java package the generated classes belong to
    #[arg(default_value = "com.example.model")]
    pub package: String,

    /// Directory to write fluent.toml into (defaults to the current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let path = write_starter(&self.package, &self.output)?;

        // The starter must round-trip through the parser before anyone edits it.
        Manifest::from_file(&path).unwrap_or_exit();

        println!("Created {}", path.display());
        println!();
        println!("Next steps:");
        if self.output != Path::new(".") {
            println!("  cd {}", self.output.display());
        }
        println!("  fluent check");
        println!("  fluent generate --dry-run");
        Ok(())
    }
}

fn write_starter(package: &str, dir: &Path) -> Result<PathBuf> {
    let path = dir.join("fluent.toml");
    if path.exists() {
        bail!("{} already exists", path.display());
    }
    std::fs::create_dir_all(dir)
        .wrap_err_with(|| format!("Failed to create {}", dir.display()))?;
    std::fs::write(&path, fluent_manifest::starter(package))
        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}
