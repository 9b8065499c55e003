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
pub struct CheckCommand {
    /// Path to tandem.toml (defaults to ./tandem.toml)
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let toml = TandemToml::open(&self.config).unwrap_or_exit();
        let files = toml.source_files().unwrap_or_exit();
        let declarations = ops::load_declarations(&toml, &files).unwrap_or_exit();

        let report = ops::check(toml.manifest(), &declarations, files.len(), &self.config);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
