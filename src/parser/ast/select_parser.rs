use crate::parser::{tokens::IdentifierParser, ParseError, Phase, QueryParser};

/// Projection form of a statement. `Columns` keeps the source order.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum SelectClause {
    #[default]
    All,
    CountAll,
    Columns(Vec<String>),
}

impl SelectClause {
    pub fn is_count(&self) -> bool {
        matches!(self, SelectClause::CountAll)
    }

    pub fn columns(&self) -> &[String] {
        match self {
            SelectClause::Columns(columns) => columns,
            _ => &[],
        }
    }
}

pub struct SelectParser;

impl SelectParser {
    /// Consumes `SELECT` and its projection, which is either `*`, `COUNT(*)`
    /// or a comma separated column list. The clause is only complete when
    /// `FROM` opens right after it.
    pub fn parse(parser: &mut QueryParser) -> Result<SelectClause, ParseError> {
        if !parser.comparers.select.compare(parser) {
            return ParseError::new("Invalid select", parser.position, parser).err();
        }
        parser.jump(parser.comparers.select.length);
        parser.next_non_whitespace();

        let clause = if parser.comparers.count_all.compare(parser) {
            parser.jump(parser.comparers.count_all.length);
            SelectClause::CountAll
        } else if parser.comparers.star.compare(parser) {
            parser.jump(parser.comparers.star.length);
            SelectClause::All
        } else {
            SelectClause::Columns(Self::parse_columns(parser)?)
        };

        if !parser.check_next_phase() {
            return ParseError::new("Unexpected token", parser.position, parser).err();
        }

        if parser.phase != Phase::From {
            return ParseError::new("Missing from clause", parser.position, parser).err();
        }

        Ok(clause)
    }

    fn parse_columns(parser: &mut QueryParser) -> Result<Vec<String>, ParseError> {
        let pivot = parser.position;
        let mut columns = vec![];
        let mut can_consume = true;

        loop {
            parser.next_non_whitespace();

            if parser.eof() || parser.comparers.from.compare(parser) {
                break;
            }

            if parser.current() == ',' {
                if can_consume {
                    return ParseError::new("Invalid select columns", parser.position, parser)
                        .err();
                }
                can_consume = true;
                parser.next();
                continue;
            }

            if !can_consume {
                return ParseError::new("Invalid select columns", parser.position, parser).err();
            }

            columns.push(IdentifierParser::parse(parser)?);
            can_consume = false;
        }

        if columns.is_empty() || can_consume {
            return ParseError::new("Invalid select columns", pivot, parser).err();
        }

        Ok(columns)
    }
}
