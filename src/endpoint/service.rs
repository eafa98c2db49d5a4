use std::sync::Arc;

use crate::datastore::Datastore;
use crate::endpoint::{Projector, ResourceResolver, RowLimitPolicy, SqlError, TableExecutor};
use crate::executor::Row;
use crate::parser::ParseTree;
use crate::query::{Query, QueryCompiler};

/// Front door for read statements. Parses, resolves the table resource,
/// compiles under the row cap and projects the executed rows for output.
pub struct SqlService {
    resolver: Arc<dyn ResourceResolver>,
    executor: Arc<dyn TableExecutor>,
    policy: Arc<dyn RowLimitPolicy>,
}

impl SqlService {
    pub fn new(
        resolver: Arc<dyn ResourceResolver>,
        executor: Arc<dyn TableExecutor>,
        policy: Arc<dyn RowLimitPolicy>,
    ) -> Self {
        Self {
            resolver,
            executor,
            policy,
        }
    }

    /// Wires every collaborator to the same datastore.
    pub fn for_datastore(store: &Datastore) -> Self {
        Self::new(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store.clone()),
        )
    }

    /// Validates a statement and compiles it into a canonical query without
    /// touching any table.
    pub fn compile_query(&self, statement: &str) -> Result<Query, SqlError> {
        let tree = ParseTree::try_from(statement)?;

        if tree.table_name().is_none() {
            return Err(SqlError::MissingTableName);
        }

        Ok(QueryCompiler::compile(&tree, self.policy.max_rows()))
    }

    /// Returns the identifier of the resource a statement reads from.
    pub fn resource_identifier(&self, statement: &str) -> Result<String, SqlError> {
        let tree = ParseTree::try_from(statement)?;

        match tree.table_name() {
            Some(name) => Ok(name.to_string()),
            None => Err(SqlError::MissingTableName),
        }
    }

    /// Runs a statement and returns its rows with display column names.
    pub fn run_query(&self, statement: &str) -> Result<Vec<Row>, SqlError> {
        self.run_query_with_columns(statement, false)
    }

    /// Runs a statement. With `show_db_columns` the rows keep their internal
    /// column names and the record number column.
    pub fn run_query_with_columns(
        &self,
        statement: &str,
        show_db_columns: bool,
    ) -> Result<Vec<Row>, SqlError> {
        let tree = ParseTree::try_from(statement)?;

        let identifier = match tree.table_name() {
            Some(name) => name.to_string(),
            None => return Err(SqlError::MissingTableName),
        };

        let resource = self
            .resolver
            .resolve(&identifier)
            .ok_or_else(|| SqlError::ResourceNotFound(identifier.clone()))?;

        let query = QueryCompiler::compile(&tree, self.policy.max_rows());

        tracing::debug!(%identifier, "running statement");

        let rows = self.executor.execute(&query, &resource);
        let schema = self.executor.schema(&resource);

        Ok(Projector::project_rows(rows, &schema, show_db_columns))
    }
}
