use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Error opening file: {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing {field} from line {line_number}: {line}")]
    MalformedLine {
        line_number: usize,
        field: Field,
        line: String,
    },

    #[error("{0} not found")]
    NotFound(Key),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    /// True for the conditions the driver reports and moves past
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_))
    }
}

/// Positional field of a source line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Identifier,
    Name,
    Price,
    Category,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Identifier => "ID",
            Field::Name => "Name",
            Field::Price => "Price",
            Field::Category => "Category",
        };
        f.write_str(name)
    }
}

/// Lookup key used by identifier- and name-keyed operations
#[derive(Debug, Clone, PartialEq)]
pub enum Key {
    Id(i64),
    Name(String),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Id(id) => write!(f, "Product with ID {}", id),
            Key::Name(name) => write!(f, "Product with Name \"{}\"", name),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
