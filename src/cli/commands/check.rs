use super::{load_source, CommandHandler, CommandResult};
use crate::catalog::Loader;
use crate::report::Console;
use crate::Result;
use std::path::PathBuf;

/// Handler for the `check` command
pub struct CheckCommand {
    pub source: PathBuf,
    pub delimiter: char,
}

impl CommandHandler for CheckCommand {
    fn execute(&self) -> Result<CommandResult> {
        let mut console = Console::stdio();
        let loader = Loader::new().with_delimiter(self.delimiter);
        let outcome = load_source(&loader, &self.source, &mut console)?;

        let accepted = outcome.records.len();
        let rejected = outcome.rejected.len();
        console.say(&format!("{} accepted, {} rejected", accepted, rejected))?;
        console.flush()?;

        if rejected > 0 {
            Ok(CommandResult::Error(format!(
                "{} malformed line(s) in {}",
                rejected,
                self.source.display()
            )))
        } else {
            Ok(CommandResult::Success(None))
        }
    }

    fn name(&self) -> &'static str {
        "check"
    }
}

impl CheckCommand {
    /// Create new check command
    pub fn new(source: PathBuf, delimiter: char) -> Self {
        Self { source, delimiter }
    }
}
