pub mod identifier_parser;
pub use identifier_parser::*;

pub mod string_parser;
pub use string_parser::*;

pub mod number_parser;
pub use number_parser::*;
