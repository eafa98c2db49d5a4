use std::sync::{Arc, RwLock};

use serde_json::Value;

use crate::datastore::TableSchema;
use crate::executor::Row;

/// Name of the sequential row identifier every stored row carries.
pub const RECORD_NUMBER_COLUMN: &str = "record_number";

/// Thread-safe handle to a registered table protected by a RwLock.
pub type MemoryTable = Arc<RwLock<InternalMemoryTable>>;

pub struct InternalMemoryTable {
    pub name: String,
    rows: Vec<Row>,
    next_record: usize,
    schema: TableSchema,
}

impl InternalMemoryTable {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            rows: Vec::new(),
            next_record: 1,
            schema: TableSchema::default(),
        }
    }

    pub fn into_protected(self) -> MemoryTable {
        Arc::new(RwLock::new(self))
    }

    pub fn count(&self) -> usize {
        self.rows.len()
    }

    /// Snapshot of the stored rows in insertion order.
    pub fn rows(&self) -> Vec<Row> {
        self.rows.clone()
    }

    pub fn schema(&self) -> TableSchema {
        self.schema.clone()
    }

    /// Stores one JSON object as a row. A row that does not already carry a
    /// record number receives the next sequential one as its first column;
    /// a carried record number moves the sequence past it. Anything that is
    /// not an object is skipped.
    pub fn insert(&mut self, item: Value) -> Option<Row> {
        let Value::Object(map) = item else {
            return None;
        };

        let mut row = Row::default();

        if !map.contains_key(RECORD_NUMBER_COLUMN) {
            row.insert(RECORD_NUMBER_COLUMN, Value::from(self.next_record));
            self.next_record = self.next_record.saturating_add(1);
        }

        for (key, value) in map {
            if key == RECORD_NUMBER_COLUMN {
                if let Some(carried) = value.as_u64() {
                    let carried = carried as usize;
                    if carried >= self.next_record {
                        // a carried record number at the ceiling pins the sequence
                        self.next_record = carried.saturating_add(1);
                    }
                }
            }
            row.insert(&key, value);
        }

        self.schema.merge_row(&row);
        self.rows.push(row.clone());

        Some(row)
    }

    pub fn insert_batch(&mut self, items: Value) -> Vec<Row> {
        let mut inserted = Vec::new();

        if let Value::Array(items) = items {
            for item in items {
                if let Some(row) = self.insert(item) {
                    inserted.push(row);
                }
            }
        }

        inserted
    }

    /// Attaches a display label to a column already present in the schema.
    pub fn describe_column(&mut self, column: &str, label: &str) {
        self.schema.describe(column, label);
    }
}
