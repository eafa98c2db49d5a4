use crate::parser::{
    tokens::{IdentifierParser, StringParser},
    ParseError, QueryParser,
};

/// Filter clause as written: column names and quoted values in source order.
/// The two lists are positional and `pairs` zips them back together.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WhereClause {
    pub columns: Vec<String>,
    pub values: Vec<String>,
}

impl WhereClause {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Zips each column with the value at its position. A column with no
    /// value on its position is dropped from the result, not an error.
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        self.columns
            .iter()
            .enumerate()
            .filter_map(|(position, column)| match self.values.get(position) {
                Some(value) => Some((column.as_str(), value.as_str())),
                None => {
                    tracing::warn!(%column, "where column has no value, skipping condition");
                    None
                }
            })
            .collect()
    }
}

pub struct WhereParser;

impl WhereParser {
    /// Consumes `WHERE` and one or more `column = 'value'` conditions joined
    /// by `AND`.
    pub fn parse(parser: &mut QueryParser) -> Result<WhereClause, ParseError> {
        if !parser.comparers.r#where.compare(parser) {
            return ParseError::new("Invalid where", parser.position, parser).err();
        }
        parser.jump(parser.comparers.r#where.length);

        let mut clause = WhereClause::default();

        loop {
            parser.next_non_whitespace();
            clause.columns.push(IdentifierParser::parse(parser)?);

            parser.next_non_whitespace();
            if !parser.comparers.equal.compare(parser) {
                return ParseError::new("Invalid condition", parser.position, parser).err();
            }
            parser.jump(parser.comparers.equal.length);

            parser.next_non_whitespace();
            clause.values.push(StringParser::parse(parser)?);

            if parser.check_next_phase() {
                return Ok(clause);
            }

            if !parser.comparers.and.compare(parser) {
                return ParseError::new("Unexpected token", parser.position, parser).err();
            }
            parser.jump(parser.comparers.and.length);
        }
    }
}
