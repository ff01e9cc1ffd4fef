pub mod loader;
pub mod record;
pub mod sorter;

pub use loader::{LoadOutcome, Loader};
pub use record::Record;
pub use sorter::{bubble_sort_by_price, timed_sort_by_price, SortReport, SortStats};

use crate::error::{CatalogError, Key};
use crate::Result;
use tracing::debug;

/// Ordered, in-memory collection of records
///
/// Insertion order is significant. Every lookup is a linear scan; no index is
/// kept, so references handed out never outlive the next mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<Record>,
}

/// Before and after state of an updated record
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub before: Record,
    pub after: Record,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding `records` in the given order
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub(crate) fn records_mut(&mut self) -> &mut [Record] {
        &mut self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Append a record; always succeeds
    pub fn insert(&mut self, record: Record) -> &Record {
        debug!(id = record.id, len = self.records.len() + 1, "Inserting record");
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// Overwrite name, price and category of the first record with `id`
    ///
    /// Later records sharing the identifier are left alone.
    pub fn update(
        &mut self,
        id: i64,
        name: impl Into<String>,
        price: f64,
        category: impl Into<String>,
    ) -> Result<Update> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(CatalogError::NotFound(Key::Id(id)))?;

        let before = record.clone();
        record.name = name.into();
        record.price = price;
        record.category = category.into();
        debug!(id, "Updated record");

        Ok(Update {
            before,
            after: record.clone(),
        })
    }

    /// Remove every record with `id`, returning how many were removed
    pub fn delete(&mut self, id: i64) -> Result<usize> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        let removed = before - self.records.len();
        if removed == 0 {
            return Err(CatalogError::NotFound(Key::Id(id)));
        }
        debug!(id, removed, "Deleted records");
        Ok(removed)
    }

    /// First record with `id`
    pub fn find_by_id(&self, id: i64) -> Result<&Record> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .ok_or(CatalogError::NotFound(Key::Id(id)))
    }

    /// First record whose name equals `name` exactly (case-sensitive, untrimmed)
    pub fn find_by_name(&self, name: &str) -> Result<&Record> {
        self.records
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| CatalogError::NotFound(Key::Name(name.to_string())))
    }
}
