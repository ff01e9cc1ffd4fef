use super::record::Record;
use crate::error::{CatalogError, Field};
use crate::Result;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

const TRIM_CHARS: &[char] = &[' ', '\t', '\r', '\n'];

/// Records accepted from a source plus one error per rejected line
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub records: Vec<Record>,
    pub rejected: Vec<CatalogError>,
}

/// Parser for line-oriented `id,name,price,category` sources
#[derive(Debug, Clone)]
pub struct Loader {
    delimiter: char,
}

impl Loader {
    /// Create a loader splitting on `,`
    pub fn new() -> Self {
        Self { delimiter: ',' }
    }

    /// Use a different field delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Load every line of the file at `path`
    ///
    /// Failing to open the file is fatal for the caller. Malformed lines are
    /// collected in [`LoadOutcome::rejected`] and loading carries on.
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<LoadOutcome> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CatalogError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "Opened catalog source");

        let outcome = self.load_reader(BufReader::new(file))?;
        info!(
            accepted = outcome.records.len(),
            rejected = outcome.rejected.len(),
            "Loaded catalog source"
        );
        Ok(outcome)
    }

    /// Load records from any buffered reader
    ///
    /// Lines are read as raw bytes; invalid UTF-8 is replaced with U+FFFD so a
    /// single undecodable line never aborts the load.
    pub fn load_reader<R: BufRead>(&self, mut reader: R) -> Result<LoadOutcome> {
        let mut outcome = LoadOutcome::default();
        let mut buf = Vec::new();
        let mut line_number = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_number += 1;

            if buf.ends_with(b"\n") {
                buf.pop();
                if buf.ends_with(b"\r") {
                    buf.pop();
                }
            }

            let line = String::from_utf8_lossy(&buf);
            match self.parse_line(&line, line_number) {
                Ok(record) => outcome.records.push(record),
                Err(e) => {
                    debug!(line_number, error = %e, "Rejected line");
                    outcome.rejected.push(e);
                }
            }
        }

        Ok(outcome)
    }

    /// Parse a single line
    ///
    /// The category takes the rest of the line, so it may contain the
    /// delimiter; the name may not.
    pub fn parse_line(&self, line: &str, line_number: usize) -> Result<Record> {
        let malformed = |field: Field| CatalogError::MalformedLine {
            line_number,
            field,
            line: line.to_string(),
        };

        let mut parts = line.splitn(4, self.delimiter);

        let id = parts
            .next()
            .and_then(|s| s.trim().parse::<i64>().ok())
            .ok_or_else(|| malformed(Field::Identifier))?;

        let name = parts
            .next()
            .map(|s| s.trim_matches(TRIM_CHARS))
            .ok_or_else(|| malformed(Field::Name))?;

        let price = parts
            .next()
            .and_then(|s| s.trim().parse::<f64>().ok())
            .ok_or_else(|| malformed(Field::Price))?;

        let category = parts
            .next()
            .filter(|s| !s.is_empty())
            .map(|s| s.trim_matches(TRIM_CHARS))
            .ok_or_else(|| malformed(Field::Category))?;

        Ok(Record::new(id, name, price, category))
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
