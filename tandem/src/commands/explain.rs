use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use tandem_manifest::{MANIFEST_FILE, TandemToml};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ExplainCommand {
    /// Path to tandem.toml (defaults to ./tandem.toml)
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,
}

impl ExplainCommand {
    pub fn run(&self) -> Result<()> {
        let toml = TandemToml::open(&self.config).unwrap_or_exit();
        let report = ops::explain(toml.manifest(), &self.config);
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
