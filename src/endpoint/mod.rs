pub mod projector;
pub mod service;
pub mod sql_error;
pub mod traits;

pub use projector::*;
pub use service::*;
pub use sql_error::*;
pub use traits::*;
