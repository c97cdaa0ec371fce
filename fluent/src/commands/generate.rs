use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use fluent_manifest::{FluentToml, Policy};

use super::UnwrapOrExit;
use crate::{
    ops::{GenerateOptions, generate},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to fluent.toml (defaults to ./fluent.toml)
    #[arg(short, long, default_value = "fluent.toml")]
    pub schema: PathBuf,

    /// Output directory (overrides the [generator] output setting)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Property policy (overrides the [generator] policy setting)
    #[arg(long)]
    pub policy: Option<Policy>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let fluent_toml = FluentToml::open(&self.schema).unwrap_or_exit();
        let base_dir = fluent_toml
            .path()
            .parent()
            .map(PathBuf::from)
            .unwrap_or_default();

        let report = generate(
            fluent_toml.into_manifest(),
            GenerateOptions {
                base_dir: &base_dir,
                output: self.output.as_deref(),
                policy: self.policy,
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
