pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod script;

pub use catalog::{Catalog, Record};
pub use error::{CatalogError, Result};
