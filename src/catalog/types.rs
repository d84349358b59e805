//! Catalog Data Types
//!
//! Defines the in-memory representation of the assessment catalog. Records
//! are identified by their position in the catalog for the process lifetime;
//! there is no separate primary key.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Canonical metadata column for the remote-testing flag.
pub const REMOTE_TESTING_COLUMN: &str = "Remote Testing Support (Yes/No)";
/// Canonical metadata column for the adaptive-support flag.
pub const ADAPTIVE_SUPPORT_COLUMN: &str = "Adaptive/IRT Support (Yes/No)";
pub const DURATION_COLUMN: &str = "Duration";
pub const TEST_TYPE_COLUMN: &str = "Test Type";

/// One catalog entry: an assessment name, its URL, and free-form metadata.
///
/// `composite_text` is derived once at load time by joining the name and URL
/// with a space. It exists only to feed the similarity index and is never
/// displayed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub name: String,
    pub url: String,
    pub metadata: HashMap<String, String>,
    pub composite_text: String,
}

impl CatalogRecord {
    pub fn new(name: String, url: String, metadata: HashMap<String, String>) -> Self {
        let composite_text = format!("{} {}", name, url);
        Self {
            name,
            url,
            metadata,
            composite_text,
        }
    }

    /// Metadata value for a column, if the record carries it.
    pub fn metadata_field(&self, column: &str) -> Option<&str> {
        self.metadata.get(column).map(String::as_str)
    }
}

/// Ordered, immutable sequence of catalog records.
///
/// The position of a record is its identity: row `i` of the similarity
/// index's weight matrix corresponds to `get(i)` for the life of the process.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<CatalogRecord>,
}

impl Catalog {
    pub fn new(records: Vec<CatalogRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CatalogRecord> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }

    /// The composite texts in catalog order, ready for index construction.
    pub fn composite_texts(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|record| record.composite_text.as_str())
            .collect()
    }
}
