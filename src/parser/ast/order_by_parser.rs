use crate::parser::{tokens::IdentifierParser, ParseError, QueryParser};

/// Sort clause as written. `ascending` records whether the statement spelled
/// out `ASC`; what the absence of a direction keyword means is owned by the
/// compiler, not the grammar.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByClause {
    pub column: String,
    pub ascending: bool,
}

pub struct OrderByParser;

impl OrderByParser {
    /// Consumes `ORDER BY`, a single column and an optional direction
    /// keyword.
    pub fn parse(parser: &mut QueryParser) -> Result<OrderByClause, ParseError> {
        if !parser.comparers.order_by.compare(parser) {
            return ParseError::new("Invalid order by", parser.position, parser).err();
        }
        parser.jump(parser.comparers.order_by.length);
        parser.next_non_whitespace();

        let column = IdentifierParser::parse(parser)?;

        if parser.check_next_phase() {
            return Ok(OrderByClause { column, ascending: false });
        }

        let ascending = if parser.comparers.asc.compare(parser) {
            parser.jump(parser.comparers.asc.length);
            true
        } else if parser.comparers.desc.compare(parser) {
            parser.jump(parser.comparers.desc.length);
            false
        } else {
            return ParseError::new("Invalid order direction", parser.position, parser).err();
        };

        if !parser.check_next_phase() {
            return ParseError::new("Unexpected token", parser.position, parser).err();
        }

        Ok(OrderByClause { column, ascending })
    }
}
