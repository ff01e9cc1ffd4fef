use crate::catalog::Record;
use serde::{Deserialize, Serialize};

/// One driver step against the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Step {
    /// Print every record under a heading
    Display { title: String },
    Insert {
        id: i64,
        name: String,
        price: f64,
        category: String,
    },
    /// Overwrite the first record with `id`
    Update {
        id: i64,
        name: String,
        price: f64,
        category: String,
    },
    /// Remove all records with `id`
    Delete { id: i64 },
    FindById { id: i64 },
    FindByName { name: String },
    SortByPrice,
}

impl Step {
    /// Step name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Step::Display { .. } => "display",
            Step::Insert { .. } => "insert",
            Step::Update { .. } => "update",
            Step::Delete { .. } => "delete",
            Step::FindById { .. } => "find_by_id",
            Step::FindByName { .. } => "find_by_name",
            Step::SortByPrice => "sort_by_price",
        }
    }

    /// Check if this step changes the catalog
    pub fn mutates(&self) -> bool {
        !matches!(
            self,
            Step::Display { .. } | Step::FindById { .. } | Step::FindByName { .. }
        )
    }

    pub fn insert(record: Record) -> Self {
        Step::Insert {
            id: record.id,
            name: record.name,
            price: record.price,
            category: record.category,
        }
    }
}

/// Fixed, non-branching sequence of steps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Script {
    pub steps: Vec<Step>,
}

impl Script {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Default for Script {
    /// Display, insert/update/delete a probe product, two searches, sort, display
    fn default() -> Self {
        Self::new(vec![
            Step::Display {
                title: "All Products".to_string(),
            },
            Step::insert(Record::new(12345, "New Product", 99.99, "New Category")),
            Step::Update {
                id: 12345,
                name: "Updated Product".to_string(),
                price: 199.99,
                category: "Updated Category".to_string(),
            },
            Step::Delete { id: 12345 },
            Step::FindById { id: 57353 },
            Step::FindByName {
                name: "Smartphone ILGCU".to_string(),
            },
            Step::SortByPrice,
            Step::Display {
                title: "After sorting".to_string(),
            },
        ])
    }
}
