use crate::parser::{ParseError, QueryParser, WordComparer};

pub struct StringParser;

impl StringParser {
    pub fn is_string_delimiter(parser: &QueryParser) -> bool {
        parser.current() == '\''
    }

    /// Single-quoted literal. The dialect has no escape sequences, so the
    /// value runs to the next quote and may not be empty or span lines.
    pub fn parse(parser: &mut QueryParser) -> Result<String, ParseError> {
        if !Self::is_string_delimiter(parser) {
            return ParseError::new("Invalid string value", parser.position, parser).err();
        }

        parser.next();
        let pivot = parser.position;

        while !parser.eof() && !Self::is_string_delimiter(parser) {
            if WordComparer::is_current_break_line(parser) {
                return ParseError::new("Invalid break line in string value", pivot, parser).err();
            }
            parser.next();
        }

        if parser.eof() {
            return ParseError::new("Unclosed string value", pivot, parser).err();
        }

        let value = parser.text_from_pivot(pivot);

        if value.is_empty() {
            return ParseError::new("Empty string value", pivot, parser).err();
        }

        parser.next();

        Ok(value)
    }
}
