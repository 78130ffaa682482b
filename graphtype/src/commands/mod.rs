mod check;
mod completions;
mod generate;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use graphtype_schema::{CONFIG_FILE, Config, SchemaError, SchemaModel};

/// Extension trait for exiting on schema errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for graphtype_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => exit_with(*e),
        }
    }
}

/// Pipeline failures caused by the schema itself get the same treatment as
/// load errors; anything else is returned to color-eyre.
pub(crate) trait ExitOnSchemaError<T> {
    fn exit_on_schema_error(self) -> Result<T>;
}

impl<T> ExitOnSchemaError<T> for Result<T> {
    fn exit_on_schema_error(self) -> Result<T> {
        self.map_err(|report| match report.downcast::<Box<SchemaError>>() {
            Ok(e) => exit_with(*e),
            Err(report) => report,
        })
    }
}

fn exit_with(error: SchemaError) -> ! {
    eprintln!("{:?}", miette::Report::new(error));
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "graphtype")]
#[command(version)]
#[command(about = "Generate TypeScript declarations from a GraphQL schema")]
pub(crate) struct Cli {
    /// Tracing filter directives (overrides GRAPHTYPE_LOG), e.g. `graphtype=debug`
    #[arg(long, global = true)]
    pub log: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate TypeScript declarations from the schema
    Generate(GenerateCommand),

    /// Validate the schema without generating code
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Where the schema and its options come from.
#[derive(Args)]
pub(crate) struct SchemaArgs {
    /// Path to graphtype.toml (defaults to ./graphtype.toml)
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Schema file (overrides the config's schema.path)
    #[arg(short, long)]
    pub schema: Option<PathBuf>,
}

impl SchemaArgs {
    /// Load the config. With `--schema` and no config file, defaults apply.
    pub fn load_config(&self) -> Config {
        match &self.schema {
            Some(schema) if !self.config.exists() => Config::for_schema(schema),
            _ => Config::from_file(&self.config).unwrap_or_exit(),
        }
    }

    pub fn schema_path(&self, config: &Config) -> PathBuf {
        self.schema
            .clone()
            .unwrap_or_else(|| config.schema_path())
    }

    /// Parse and validate the schema, exiting on any schema error.
    pub fn load_model(&self, config: &Config) -> SchemaModel {
        let path = self.schema_path(config);
        tracing::debug!(path = %path.display(), "loading schema");
        SchemaModel::from_file(&path).unwrap_or_exit()
    }
}
