pub mod check;
pub mod run;
pub mod show;

use crate::catalog::{LoadOutcome, Loader};
use crate::report::Console;
use crate::Result;
use std::io::Write;
use std::path::Path;

/// Common trait for all command handlers
pub trait CommandHandler {
    /// Execute the command
    fn execute(&self) -> Result<CommandResult>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}

/// Command execution result
#[derive(Debug, PartialEq)]
pub enum CommandResult {
    /// Success with optional message
    Success(Option<String>),
    /// Error with message
    Error(String),
}

impl CommandResult {
    /// Convert to exit code
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandResult::Success(_) => 0,
            CommandResult::Error(_) => 1,
        }
    }

    /// Get message if any
    pub fn message(&self) -> Option<&str> {
        match self {
            CommandResult::Success(msg) => msg.as_deref(),
            CommandResult::Error(msg) => Some(msg),
        }
    }
}

/// Load `source`, announcing the open and echoing each rejected line
pub fn load_source<O: Write, E: Write>(
    loader: &Loader,
    source: &Path,
    console: &mut Console<O, E>,
) -> Result<LoadOutcome> {
    let outcome = loader.load_file(source)?;
    console.say("File opened successfully.")?;
    for rejected in &outcome.rejected {
        console.warn(&rejected.to_string())?;
    }
    Ok(outcome)
}
