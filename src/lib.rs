pub mod parser;

pub mod query;
pub use query::{Query, QueryCompiler, SortDirection};

pub mod datastore;
pub use datastore::{
    Datastore, DatastoreCommon, FieldInfo, JsonPrimitive, TableResource, TableSchema,
};

pub mod executor;
pub use executor::Row;

pub mod endpoint;
pub use endpoint::{ResourceResolver, RowLimitPolicy, SqlError, SqlService, TableExecutor};
