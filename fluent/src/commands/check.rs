use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use fluent_manifest::FluentToml;

use super::UnwrapOrExit;
use crate::{
    ops::check,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to fluent.toml (defaults to ./fluent.toml)
    #[arg(short, long, default_value = "fluent.toml")]
    pub schema: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let fluent_toml = FluentToml::open(&self.schema).unwrap_or_exit();
        let report = check(fluent_toml.manifest(), fluent_toml.path())?;

        report.render(&mut TerminalOutput::new());
        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
