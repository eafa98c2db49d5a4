use crate::parser::{ParseError, QueryParser};

pub struct IdentifierParser;

impl IdentifierParser {
    /// Identifiers cover column names and table names, including the
    /// UUID-shaped ones the datastore registers, so hyphens are part of the
    /// charset and a leading digit is fine.
    pub fn is_identifier_char(ch: char) -> bool {
        ch.is_ascii_alphanumeric() || ch == '_' || ch == '-'
    }

    pub fn parse(parser: &mut QueryParser) -> Result<String, ParseError> {
        let pivot = parser.position;

        while !parser.eof() && Self::is_identifier_char(parser.current()) {
            parser.next();
        }

        if parser.position == pivot {
            return ParseError::new("Invalid identifier", pivot, parser).err();
        }

        Ok(parser.text_from_pivot(pivot))
    }
}
