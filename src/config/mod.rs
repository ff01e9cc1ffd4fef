pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, CONFIG_FILE_NAME};
pub use types::{RunConfig, DEFAULT_SOURCE};
