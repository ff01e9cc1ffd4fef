use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Stockroom: in-memory product catalog from a delimited flat file
#[derive(Parser)]
#[command(name = "stockroom")]
#[command(version = "0.1.0")]
#[command(about = "In-memory product catalog loaded from a delimited flat file")]
#[command(
    long_about = "Stockroom loads id,name,price,category records into memory, runs a scripted sequence of catalog operations against them and sorts the result by price."
)]
pub struct Cli {
    /// Log level for diagnostics on stderr (RUST_LOG takes precedence)
    #[arg(long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Defaults to `run` with no options
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Load the catalog and run the configured script
    Run {
        /// Config file path (defaults to ./stockroom.yaml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Source file, overriding the config
        #[arg(short, long)]
        source: Option<PathBuf>,
    },

    /// Load the catalog and print every record
    Show {
        /// Source file
        #[arg(short, long, default_value = crate::config::DEFAULT_SOURCE)]
        source: PathBuf,

        /// Field delimiter
        #[arg(short, long, default_value_t = ',')]
        delimiter: char,

        /// Sort by price before printing
        #[arg(long)]
        sort: bool,
    },

    /// Load the catalog and report rejected lines
    Check {
        /// Source file
        #[arg(short, long, default_value = crate::config::DEFAULT_SOURCE)]
        source: PathBuf,

        /// Field delimiter
        #[arg(short, long, default_value_t = ',')]
        delimiter: char,
    },
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Run { .. } => "run",
            Commands::Show { .. } => "show",
            Commands::Check { .. } => "check",
        }
    }
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Run {
            config: None,
            source: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_run() {
        let cli = Cli::parse_from(["stockroom"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.command.unwrap_or_default(), Commands::default());
        assert_eq!(cli.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_run_parsing() {
        let cli = Cli::parse_from([
            "stockroom",
            "run",
            "--config",
            "my.yaml",
            "--source",
            "items.txt",
            "--log-level",
            "debug",
        ]);
        assert_eq!(cli.log_level, LogLevel::Debug);
        match cli.command {
            Some(Commands::Run { config, source }) => {
                assert_eq!(config, Some(PathBuf::from("my.yaml")));
                assert_eq!(source, Some(PathBuf::from("items.txt")));
            }
            _ => panic!("Expected Run command"),
        }
    }

    #[test]
    fn test_show_defaults() {
        let cli = Cli::parse_from(["stockroom", "show"]);
        let command = cli.command.unwrap();
        assert_eq!(command.name(), "show");
        assert_eq!(
            command,
            Commands::Show {
                source: PathBuf::from("product_data.txt"),
                delimiter: ',',
                sort: false,
            }
        );
    }

    #[test]
    fn test_check_with_delimiter() {
        let cli = Cli::parse_from(["stockroom", "check", "-s", "a.txt", "-d", "|"]);
        match cli.command {
            Some(Commands::Check { source, delimiter }) => {
                assert_eq!(source, PathBuf::from("a.txt"));
                assert_eq!(delimiter, '|');
            }
            _ => panic!("Expected Check command"),
        }
    }
}
