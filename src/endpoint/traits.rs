use crate::datastore::{TableResource, TableSchema};
use crate::executor::Row;
use crate::query::Query;

/// Maps a statement's table identifier to a registered resource.
pub trait ResourceResolver: Send + Sync {
    fn resolve(&self, identifier: &str) -> Option<TableResource>;
}

/// Runs a canonical query against the rows of a resolved resource.
pub trait TableExecutor: Send + Sync {
    fn execute(&self, query: &Query, resource: &TableResource) -> Vec<Row>;
    fn schema(&self, resource: &TableResource) -> TableSchema;
}

/// Supplies the cap on how many rows a single statement may return.
pub trait RowLimitPolicy: Send + Sync {
    fn max_rows(&self) -> usize;
}
