use anyhow::{Context, Result};
use clap::Parser;
use stockroom::cli::commands::{
    check::CheckCommand, run::RunCommand, show::ShowCommand, CommandHandler,
};
use stockroom::cli::{Cli, Commands, LogLevel};
use tracing_subscriber::EnvFilter;

/// Initialize tracing with the CLI log level
///
/// RUST_LOG wins when set. Logs always go to stderr so stdout stays clean.
fn initialize_tracing(log_level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing(cli.log_level);

    let command = cli.command.unwrap_or_default();
    let handler: Box<dyn CommandHandler> = match command {
        Commands::Run { config, source } => Box::new(RunCommand::new(config, source)),
        Commands::Show {
            source,
            delimiter,
            sort,
        } => Box::new(ShowCommand::new(source, delimiter, sort)),
        Commands::Check { source, delimiter } => Box::new(CheckCommand::new(source, delimiter)),
    };

    let result = handler
        .execute()
        .with_context(|| format!("stockroom {} failed", handler.name()))?;

    if let Some(message) = result.message() {
        eprintln!("{}", message);
    }
    if result.exit_code() != 0 {
        std::process::exit(result.exit_code());
    }
    Ok(())
}
