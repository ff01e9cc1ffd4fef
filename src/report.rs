use crate::catalog::Record;
use std::io::{self, Stderr, Stdout, Write};

/// Single labeled line for a record
pub fn format_record(record: &Record) -> String {
    format!(
        "ID: {}\tName: {}\tPrice: {}\tCategory: {}",
        record.id, record.name, record.price, record.category
    )
}

/// Every record in order, one newline-terminated line each
pub fn format_all(records: &[Record]) -> String {
    records
        .iter()
        .map(|r| format_record(r) + "\n")
        .collect()
}

/// Status and diagnostic streams used by the driver
///
/// Results go to `out`, not-found and parse diagnostics go to `err`.
pub struct Console<O: Write, E: Write> {
    out: O,
    err: E,
}

impl Console<Stdout, Stderr> {
    /// Console bound to the process streams
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Console<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// Write a status line
    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{}", line)
    }

    /// Write a diagnostic line
    pub fn warn(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.err, "{}", line)
    }

    pub fn record(&mut self, record: &Record) -> io::Result<()> {
        self.say(&format_record(record))
    }

    pub fn records(&mut self, records: &[Record]) -> io::Result<()> {
        self.out.write_all(format_all(records).as_bytes())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }

    /// Hand back both streams
    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }
}
