use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use fluent_manifest::FluentToml;

use super::UnwrapOrExit;
use crate::{
    ops::list,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    /// Path to fluent.toml (defaults to ./fluent.toml)
    #[arg(short, long, default_value = "fluent.toml")]
    pub schema: PathBuf,

    /// Print the lowered class hierarchy as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let fluent_toml = FluentToml::open(&self.schema).unwrap_or_exit();
        let report = list(fluent_toml.manifest(), self.json)?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
