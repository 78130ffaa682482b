use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::{ExitOnSchemaError, SchemaArgs};
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub schema: SchemaArgs,

    /// Output file (overrides the config's output.path)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = self.schema.load_config();
        let model = self.schema.load_model(&config);
        let output = self
            .output
            .clone()
            .unwrap_or_else(|| config.output_path());

        let report = ops::generate(
            model,
            &config,
            GenerateOptions {
                output: &output,
                dry_run: self.dry_run,
            },
        )
        .exit_on_schema_error()?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
