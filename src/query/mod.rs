pub mod query;
pub use query::*;

pub mod compiler;
pub use compiler::*;
