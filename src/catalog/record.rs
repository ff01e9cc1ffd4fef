use serde::{Deserialize, Serialize};

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Intended to be unique; duplicates are tolerated
    pub id: i64,
    pub name: String,
    /// Non-negative by convention only
    pub price: f64,
    pub category: String,
}

impl Record {
    pub fn new(id: i64, name: impl Into<String>, price: f64, category: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category: category.into(),
        }
    }
}
