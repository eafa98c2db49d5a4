use crate::parser::{tokens::NumberParser, ParseError, QueryParser};

/// Paging clause as written. `LIMIT` opens the clause and `OFFSET` may only
/// follow it.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct LimitClause {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

pub struct LimitParser;

impl LimitParser {
    pub fn parse(parser: &mut QueryParser) -> Result<LimitClause, ParseError> {
        if !parser.comparers.limit.compare(parser) {
            return ParseError::new("Invalid limit", parser.position, parser).err();
        }
        parser.jump(parser.comparers.limit.length);
        parser.next_non_whitespace();

        let mut clause = LimitClause {
            limit: Some(NumberParser::parse(parser)?),
            offset: None,
        };

        if parser.check_next_phase() {
            return Ok(clause);
        }

        if !parser.comparers.offset.compare(parser) {
            return ParseError::new("Unexpected token", parser.position, parser).err();
        }
        parser.jump(parser.comparers.offset.length);
        parser.next_non_whitespace();

        clause.offset = Some(NumberParser::parse(parser)?);

        if !parser.check_next_phase() {
            return ParseError::new("Unexpected token", parser.position, parser).err();
        }

        Ok(clause)
    }
}

#[cfg(test)]
pub mod tests {
    use crate::parser::{LimitClause, LimitParser, ParseError, Phase, QueryParser};

    fn parse_limit(text: &str) -> Result<LimitClause, ParseError> {
        let mut parser = QueryParser::new(text);
        parser.phase = Phase::LimitOffset;
        LimitParser::parse(&mut parser)
    }

    #[test]
    pub fn test_limit_parser() {
        let clause = parse_limit("LIMIT 10").expect("Failed to parse limit");

        assert_eq!(clause.limit, Some(10));
        assert_eq!(clause.offset, None);
    }

    #[test]
    pub fn test_limit_parser_with_offset() {
        let clause = parse_limit("limit 10 offset 20").expect("Failed to parse limit");

        assert_eq!(clause.limit, Some(10));
        assert_eq!(clause.offset, Some(20));
    }

    #[test]
    pub fn test_limit_parser_rejects_offset_first() {
        let result = parse_limit("OFFSET 20 LIMIT 10");

        match result {
            Ok(_) => panic!(),
            Err(err) => assert_eq!(err.message, "Invalid limit"),
        }
    }

    #[test]
    pub fn test_limit_parser_rejects_missing_count() {
        let result = parse_limit("LIMIT ");

        match result {
            Ok(_) => panic!(),
            Err(err) => assert_eq!(err.message, "Invalid number value"),
        }
    }

    #[test]
    pub fn test_limit_parser_rejects_trailing_garbage() {
        let result = parse_limit("LIMIT 10 OFFSET 20 LIMIT 5");

        match result {
            Ok(_) => panic!(),
            Err(err) => assert_eq!(err.message, "Unexpected token"),
        }
    }
}
