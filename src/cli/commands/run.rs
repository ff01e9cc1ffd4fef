use super::{load_source, CommandHandler, CommandResult};
use crate::catalog::{Catalog, Loader};
use crate::config::ConfigLoader;
use crate::report::Console;
use crate::script::ScriptRunner;
use crate::Result;
use std::path::PathBuf;
use tracing::info;

/// Handler for the `run` command
pub struct RunCommand {
    pub config: Option<PathBuf>,
    pub source: Option<PathBuf>,
}

impl CommandHandler for RunCommand {
    fn execute(&self) -> Result<CommandResult> {
        let mut config = ConfigLoader::new().load(self.config.as_deref())?;
        if let Some(source) = &self.source {
            config.source = source.clone();
        }
        info!(source = %config.source.display(), steps = config.script.len(), "Starting run");

        let mut console = Console::stdio();
        let loader = Loader::new().with_delimiter(config.delimiter);
        let outcome = load_source(&loader, &config.source, &mut console)?;

        let mut catalog = Catalog::from_records(outcome.records);
        let mut runner = ScriptRunner::new(console);
        runner.run(&mut catalog, &config.script)?;

        Ok(CommandResult::Success(None))
    }

    fn name(&self) -> &'static str {
        "run"
    }
}

impl RunCommand {
    /// Create new run command
    pub fn new(config: Option<PathBuf>, source: Option<PathBuf>) -> Self {
        Self { config, source }
    }
}
