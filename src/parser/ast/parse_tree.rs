use crate::parser::ast::{
    FromParser, LimitClause, LimitParser, OrderByClause, OrderByParser, SelectClause,
    SelectParser, WhereClause, WhereParser,
};
use crate::parser::{ParseError, Phase, QueryParser};

/// Everything the grammar accepted, clause by clause, before compilation
/// turns it into a canonical query.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParseTree {
    pub select: SelectClause,
    pub table: Option<String>,
    pub where_clause: WhereClause,
    pub order_by: Option<OrderByClause>,
    pub limits: LimitClause,
}

impl ParseTree {
    /// Runs the clause sub-machines in phase order. Each one either accepts
    /// its clause entirely or rejects the whole statement.
    pub fn parse(parser: &mut QueryParser) -> Result<Self, ParseError> {
        parser.next_non_whitespace();

        let mut tree = ParseTree::default();

        while parser.phase != Phase::Eof {
            match parser.phase {
                Phase::Select => tree.select = SelectParser::parse(parser)?,
                Phase::From => tree.table = Some(FromParser::parse(parser)?),
                Phase::Where => tree.where_clause = WhereParser::parse(parser)?,
                Phase::OrderBy => tree.order_by = Some(OrderByParser::parse(parser)?),
                Phase::LimitOffset => tree.limits = LimitParser::parse(parser)?,
                Phase::Eof => break,
            }
        }

        Ok(tree)
    }

    /// Identifier of the resource the statement reads from.
    pub fn table_name(&self) -> Option<&str> {
        self.table.as_deref()
    }
}

impl TryFrom<&str> for ParseTree {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut parser = QueryParser::new(value);
        ParseTree::parse(&mut parser)
    }
}
