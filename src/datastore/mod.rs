pub mod schema;
pub use schema::*;

pub mod resource;
pub use resource::*;

pub mod memory_table;
pub use memory_table::*;

pub mod load_error;
pub use load_error::*;

pub mod labels;

pub mod store;
pub use store::*;
