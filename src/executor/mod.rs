pub mod row;
pub use row::*;

pub mod helpers;
pub use helpers::*;

pub mod query_executor;
pub use query_executor::*;
