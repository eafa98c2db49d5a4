use crate::parser::WordComparer;

/// The keyword sub-machines of the restricted dialect, one comparer per
/// terminal the grammar can sit on.
#[derive(Debug)]
pub struct QueryComparers {
    pub select: WordComparer,
    pub star: WordComparer,
    pub count_all: WordComparer,
    pub from: WordComparer,
    pub r#where: WordComparer,
    pub and: WordComparer,
    pub equal: WordComparer,
    pub order_by: WordComparer,
    pub asc: WordComparer,
    pub desc: WordComparer,
    pub limit: WordComparer,
    pub offset: WordComparer,
}

impl Default for QueryComparers {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryComparers {
    pub fn new() -> Self {
        Self {
            select: WordComparer::new("SELECT").with_whitespace_postfix(),
            star: WordComparer::new("*").with_whitespace_postfix(),
            count_all: WordComparer::new("COUNT(*)").with_whitespace_postfix(),
            from: WordComparer::new("FROM").with_whitespace_postfix(),
            r#where: WordComparer::new("WHERE").with_whitespace_postfix(),
            and: WordComparer::new("AND").with_whitespace_postfix(),
            equal: WordComparer::new("=").with_whitespace_postfix().with_optional_postfix('\''),
            order_by: WordComparer::new("ORDER BY").with_whitespace_postfix(),
            asc: WordComparer::new("ASC").with_whitespace_postfix().with_eof(),
            desc: WordComparer::new("DESC").with_whitespace_postfix().with_eof(),
            limit: WordComparer::new("LIMIT").with_whitespace_postfix(),
            offset: WordComparer::new("OFFSET").with_whitespace_postfix(),
        }
    }
}
