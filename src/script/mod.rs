pub mod runner;
pub mod types;

pub use runner::{RunSummary, ScriptRunner};
pub use types::{Script, Step};
