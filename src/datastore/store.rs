use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, RwLock},
};

use indexmap::IndexMap;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::datastore::{
    labels, InternalMemoryTable, LoadError, MemoryTable, TableResource, TableSchema,
};
use crate::endpoint::{ResourceResolver, RowLimitPolicy, TableExecutor};
use crate::executor::{QueryExecutor, Row};
use crate::query::Query;

/// Cap on how many rows a single statement may return unless the store is
/// built with another value.
pub const DEFAULT_MAX_ROWS: usize = 500;

/// Thread-safe handle to the table registry.
pub type Datastore = Arc<RwLock<InternalDatastore>>;

pub struct InternalDatastore {
    max_rows: usize,
    tables: HashMap<String, MemoryTable>,
    resources: HashMap<String, TableResource>,
}

impl Default for InternalDatastore {
    fn default() -> Self {
        Self::new_store_with_max_rows(DEFAULT_MAX_ROWS)
    }
}

impl InternalDatastore {
    fn new_store() -> Self {
        Self::default()
    }

    fn new_store_with_max_rows(max_rows: usize) -> Self {
        Self {
            max_rows,
            tables: HashMap::new(),
            resources: HashMap::new(),
        }
    }

    pub fn into_protected(self) -> Datastore {
        Arc::new(RwLock::new(self))
    }

    /// Registers a table under a caller-chosen identifier. Registering an
    /// identifier again replaces the table and advances the resource
    /// version.
    pub fn register_as(&mut self, identifier: &str, rows: Value) -> String {
        let mut table = InternalMemoryTable::new(identifier);
        let inserted = table.insert_batch(rows);

        tracing::debug!(table = %table.name, rows = inserted.len(), "registered table");

        self.tables.insert(identifier.to_string(), table.into_protected());
        self.resources.insert(identifier.to_string(), TableResource::new(identifier));

        identifier.to_string()
    }

    /// Registers a table under a fresh UUID identifier.
    pub fn register(&mut self, rows: Value) -> String {
        let identifier = Uuid::new_v4().to_string();
        self.register_as(&identifier, rows)
    }

    /// Registers rows whose keys are human labels, as they come out of
    /// spreadsheet-like headers. Keys become machine names and labels that
    /// differ from their machine name are kept as column descriptions, so
    /// projection renders the original headings.
    pub fn register_labeled(&mut self, rows: Value) -> String {
        let mut labels_by_column: IndexMap<String, String> = IndexMap::new();
        let mut renamed_rows = Vec::new();

        if let Value::Array(items) = rows {
            for item in items {
                let Value::Object(object) = item else {
                    continue;
                };

                let mut renamed = Map::new();
                for (label, value) in object {
                    let column = labels::machine_name(&label);
                    if column != label {
                        labels_by_column.entry(column.clone()).or_insert(label);
                    }
                    renamed.insert(column, value);
                }
                renamed_rows.push(Value::Object(renamed));
            }
        }

        let identifier = self.register(Value::Array(renamed_rows));

        if let Some(table) = self.table(&identifier) {
            let mut guard = table.write().unwrap();
            for (column, label) in &labels_by_column {
                guard.describe_column(column, label);
            }
        }

        identifier
    }

    pub fn register_from_json_file(&mut self, path: &Path) -> Result<String, LoadError> {
        let content = std::fs::read_to_string(path)?;
        let rows = serde_json::from_str::<Value>(&content)?;

        Ok(self.register(rows))
    }

    pub fn table(&self, identifier: &str) -> Option<MemoryTable> {
        self.tables.get(identifier).map(Arc::clone)
    }

    pub fn resource(&self, identifier: &str) -> Option<TableResource> {
        self.resources.get(identifier).cloned()
    }

    pub fn list_resources(&self) -> Vec<String> {
        self.resources.keys().cloned().collect::<Vec<_>>()
    }

    pub fn max_rows(&self) -> usize {
        self.max_rows
    }
}

/// Registration and lookup surface of the thread-safe handle.
pub trait DatastoreCommon {
    fn new_store() -> Self;
    fn new_store_with_max_rows(max_rows: usize) -> Self;
    fn register(&mut self, rows: Value) -> String;
    fn register_as(&mut self, identifier: &str, rows: Value) -> String;
    fn register_labeled(&mut self, rows: Value) -> String;
    fn register_from_json_file(&mut self, path: &Path) -> Result<String, LoadError>;
    fn table(&self, identifier: &str) -> Option<MemoryTable>;
    fn list_resources(&self) -> Vec<String>;
}

impl DatastoreCommon for Datastore {
    fn new_store() -> Self {
        InternalDatastore::new_store().into_protected()
    }

    fn new_store_with_max_rows(max_rows: usize) -> Self {
        InternalDatastore::new_store_with_max_rows(max_rows).into_protected()
    }

    fn register(&mut self, rows: Value) -> String {
        self.write().unwrap().register(rows)
    }

    fn register_as(&mut self, identifier: &str, rows: Value) -> String {
        self.write().unwrap().register_as(identifier, rows)
    }

    fn register_labeled(&mut self, rows: Value) -> String {
        self.write().unwrap().register_labeled(rows)
    }

    fn register_from_json_file(&mut self, path: &Path) -> Result<String, LoadError> {
        self.write().unwrap().register_from_json_file(path)
    }

    fn table(&self, identifier: &str) -> Option<MemoryTable> {
        self.read().unwrap().table(identifier)
    }

    fn list_resources(&self) -> Vec<String> {
        self.read().unwrap().list_resources()
    }
}

impl ResourceResolver for Datastore {
    fn resolve(&self, identifier: &str) -> Option<TableResource> {
        self.read().unwrap().resource(identifier)
    }
}

impl TableExecutor for Datastore {
    fn execute(&self, query: &Query, resource: &TableResource) -> Vec<Row> {
        let table = self.read().unwrap().table(&resource.identifier);

        match table {
            Some(table) => {
                let rows = table.read().unwrap().rows();
                QueryExecutor::execute(query, rows)
            }
            None => Vec::new(),
        }
    }

    fn schema(&self, resource: &TableResource) -> TableSchema {
        let table = self.read().unwrap().table(&resource.identifier);

        match table {
            Some(table) => table.read().unwrap().schema(),
            None => TableSchema::default(),
        }
    }
}

impl RowLimitPolicy for Datastore {
    fn max_rows(&self) -> usize {
        self.read().unwrap().max_rows()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use serde_json::json;

    use crate::datastore::{Datastore, DatastoreCommon, LoadError, DEFAULT_MAX_ROWS};
    use crate::endpoint::{ResourceResolver, RowLimitPolicy, TableExecutor};
    use crate::query::Query;

    fn mk_store() -> Datastore {
        Datastore::new_store()
    }

    #[test]
    fn test_register_returns_uuid_identifier() {
        let mut store = mk_store();

        let identifier = store.register(json!([{ "name": "Alice" }]));

        assert_eq!(identifier.len(), 36);
        assert!(store.table(&identifier).is_some());
        assert!(store.resolve(&identifier).is_some());
        assert_eq!(store.list_resources(), [identifier]);
    }

    #[test]
    fn test_register_as_keeps_identifier_and_advances_version() {
        let mut store = mk_store();

        store.register_as("people", json!([{ "name": "Alice" }]));
        let first = store.resolve("people").expect("Missing resource");

        store.register_as("people", json!([{ "name": "Bruno" }]));
        let second = store.resolve("people").expect("Missing resource");

        assert!(first.version <= second.version);

        let table = store.table("people").expect("Missing table");
        assert_eq!(table.read().unwrap().count(), 1);
    }

    #[test]
    fn test_register_labeled_renames_and_describes() {
        let mut store = mk_store();

        let identifier = store.register_labeled(json!([
            { "First Name": "Alice", "Total (USD)": 10, "age": 29 }
        ]));

        let table = store.table(&identifier).expect("Missing table");
        let guard = table.read().unwrap();

        let rows = guard.rows();
        assert_eq!(rows[0].get("first_name"), Some(&json!("Alice")));
        assert_eq!(rows[0].get("total_usd"), Some(&json!(10)));

        let schema = guard.schema();
        assert_eq!(schema.description_of("first_name"), Some("First Name"));
        assert_eq!(schema.description_of("total_usd"), Some("Total (USD)"));
        assert_eq!(schema.description_of("age"), None);
    }

    #[test]
    fn test_register_from_json_file() {
        let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("people.json");
        fs::write(&path, r#"[{ "name": "Alice" }, { "name": "Bruno" }]"#)
            .expect("Failed to write file");

        let mut store = mk_store();
        let identifier = store.register_from_json_file(&path).expect("Failed to register");

        let table = store.table(&identifier).expect("Missing table");
        assert_eq!(table.read().unwrap().count(), 2);
    }

    #[test]
    fn test_register_from_missing_file_is_io_error() {
        let mut store = mk_store();

        let result = store.register_from_json_file("no-such-file.json".as_ref());

        match result {
            Err(LoadError::Io(_)) => {}
            _ => panic!(),
        }
    }

    #[test]
    fn test_register_from_invalid_json_is_json_error() {
        let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("broken.json");
        fs::write(&path, "not json at all").expect("Failed to write file");

        let mut store = mk_store();
        let result = store.register_from_json_file(&path);

        match result {
            Err(LoadError::Json(_)) => {}
            _ => panic!(),
        }
    }

    #[test]
    fn test_max_rows_policy() {
        let store = mk_store();
        assert_eq!(store.max_rows(), DEFAULT_MAX_ROWS);

        let store = Datastore::new_store_with_max_rows(10);
        assert_eq!(store.max_rows(), 10);
    }

    #[test]
    fn test_resolve_unknown_identifier() {
        let store = mk_store();

        assert_eq!(store.resolve("missing"), None);
    }

    #[test]
    fn test_execute_through_the_resolver_pair() {
        let mut store = mk_store();
        let identifier = store.register(json!([
            { "name": "Alice", "city": "Porto" },
            { "name": "Bruno", "city": "Lisboa" }
        ]));

        let resource = store.resolve(&identifier).expect("Missing resource");

        let mut query = Query::default();
        query.add_condition("city", "Porto");

        let rows = store.execute(&query, &resource);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("name"), Some(&json!("Alice")));

        let schema = TableExecutor::schema(&store, &resource);
        assert!(schema.get("city").is_some());
    }

    #[test]
    fn test_execute_with_stale_resource_returns_nothing() {
        let store = mk_store();
        let resource = crate::datastore::TableResource::new("gone");

        let rows = store.execute(&Query::default(), &resource);

        assert!(rows.is_empty());
        assert!(TableExecutor::schema(&store, &resource).fields.is_empty());
    }
}
