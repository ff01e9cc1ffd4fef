use super::{load_source, CommandHandler, CommandResult};
use crate::catalog::{timed_sort_by_price, Catalog, Loader};
use crate::report::Console;
use crate::Result;
use std::path::PathBuf;

/// Handler for the `show` command
pub struct ShowCommand {
    pub source: PathBuf,
    pub delimiter: char,
    pub sort: bool,
}

impl CommandHandler for ShowCommand {
    fn execute(&self) -> Result<CommandResult> {
        let mut console = Console::stdio();
        let loader = Loader::new().with_delimiter(self.delimiter);
        let outcome = load_source(&loader, &self.source, &mut console)?;

        let mut catalog = Catalog::from_records(outcome.records);
        if self.sort {
            timed_sort_by_price(&mut catalog);
        }

        console.records(catalog.records())?;
        console.flush()?;
        Ok(CommandResult::Success(None))
    }

    fn name(&self) -> &'static str {
        "show"
    }
}

impl ShowCommand {
    /// Create new show command
    pub fn new(source: PathBuf, delimiter: char, sort: bool) -> Self {
        Self {
            source,
            delimiter,
            sort,
        }
    }
}
