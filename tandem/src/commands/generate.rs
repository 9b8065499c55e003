use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use tandem_manifest::{MANIFEST_FILE, TandemToml};

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to tandem.toml (defaults to ./tandem.toml)
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,

    /// Output directory (defaults to `sources.output` in tandem.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated units without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Write a JSON snapshot after every phase to this directory
    #[arg(long, value_name = "DIR")]
    pub visualize: Option<PathBuf>,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let toml = TandemToml::open(&self.config).unwrap_or_exit();
        let files = toml.source_files().unwrap_or_exit();
        let declarations = ops::load_declarations(&toml, &files).unwrap_or_exit();

        let output_dir = self.output.clone().unwrap_or_else(|| toml.output_dir());
        let report = ops::generate(
            toml.manifest(),
            declarations,
            GenerateOptions {
                output_dir: &output_dir,
                dry_run: self.dry_run,
                visualize: self.visualize.as_deref(),
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
