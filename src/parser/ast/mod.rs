pub mod parse_tree;
pub use parse_tree::*;

pub mod select_parser;
pub use select_parser::*;

pub mod from_parser;
pub use from_parser::*;

pub mod where_parser;
pub use where_parser::*;

pub mod order_by_parser;
pub use order_by_parser::*;

pub mod limit_parser;
pub use limit_parser::*;
