mod commands;
mod ops;
mod reports;

use clap::Parser;
use eyre::Result;
use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::commands::Cli;

/// Environment variable read when `--log` is not given.
const LOG_ENV: &str = "GRAPHTYPE_LOG";

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.log.as_deref());
    cli.run()
}

fn init_tracing(directives: Option<&str>) {
    let filter = {
        let builder = EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .with_env_var(LOG_ENV);
        match directives {
            Some(directives) => builder.parse_lossy(directives),
            None => builder.from_env_lossy(),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
