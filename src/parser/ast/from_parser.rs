use crate::parser::{tokens::IdentifierParser, ParseError, QueryParser};

pub struct FromParser;

impl FromParser {
    /// Consumes `FROM` and the identifier of the resource the statement
    /// reads. Identifiers cover plain table names and the UUID-shaped names
    /// the datastore registers.
    pub fn parse(parser: &mut QueryParser) -> Result<String, ParseError> {
        if !parser.comparers.from.compare(parser) {
            return ParseError::new("Invalid from", parser.position, parser).err();
        }
        parser.jump(parser.comparers.from.length);
        parser.next_non_whitespace();

        let table = IdentifierParser::parse(parser)?;

        if !parser.check_next_phase() {
            return ParseError::new("Unexpected token", parser.position, parser).err();
        }

        Ok(table)
    }
}
