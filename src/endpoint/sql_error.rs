use std::fmt::Display;

use crate::parser::ParseError;

/// Failure of one endpoint call.
#[derive(Debug, Clone)]
pub enum SqlError {
    /// The statement was rejected by the grammar.
    InvalidQuery(ParseError),
    /// The statement carried no table identifier. The grammar requires one,
    /// so an accepted statement cannot reach this.
    MissingTableName,
    /// No resource is registered under the statement's table identifier.
    ResourceNotFound(String),
}

impl Display for SqlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SqlError::InvalidQuery(error) => write!(f, "Invalid query: {error}"),
            SqlError::MissingTableName => write!(f, "No table name"),
            SqlError::ResourceNotFound(identifier) => {
                write!(f, "Resource not found: {identifier}")
            }
        }
    }
}

impl std::error::Error for SqlError {}

impl From<ParseError> for SqlError {
    fn from(error: ParseError) -> Self {
        SqlError::InvalidQuery(error)
    }
}
