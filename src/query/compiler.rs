use crate::parser::{LimitClause, OrderByClause, ParseTree, SelectClause, WhereClause};
use crate::query::{Query, SortDirection};

pub struct QueryCompiler;

impl QueryCompiler {
    /// Translates an accepted parse tree into the canonical query.
    /// `max_rows` caps how many rows a single statement may return; the cap
    /// is also the default limit when the statement carries none.
    pub fn compile(tree: &ParseTree, max_rows: usize) -> Query {
        let mut query = Query::default();

        Self::apply_select(&mut query, &tree.select);
        Self::apply_where(&mut query, &tree.where_clause);
        Self::apply_order_by(&mut query, tree.order_by.as_ref());
        Self::apply_limits(&mut query, &tree.limits, max_rows);

        tracing::debug!(?query, "compiled statement");

        query
    }

    fn apply_select(query: &mut Query, select: &SelectClause) {
        match select {
            SelectClause::All => {}
            SelectClause::CountAll => query.set_count(),
            SelectClause::Columns(columns) => {
                for column in columns {
                    query.select_property(column);
                }
            }
        }
    }

    fn apply_where(query: &mut Query, clause: &WhereClause) {
        for (column, value) in clause.pairs() {
            query.add_condition(column, value);
        }
    }

    fn apply_order_by(query: &mut Query, clause: Option<&OrderByClause>) {
        if let Some(clause) = clause {
            // Only an explicit ASC sorts ascending. A bare `ORDER BY column`
            // sorts descending.
            let direction = if clause.ascending {
                SortDirection::Ascending
            } else {
                SortDirection::Descending
            };

            query.set_order(&clause.column, direction);
        }
    }

    /// A limit above the cap falls back to the cap, and count statements
    /// never receive a default limit so the count reflects the whole
    /// filtered set.
    fn apply_limits(query: &mut Query, limits: &LimitClause, max_rows: usize) {
        match limits.limit {
            Some(limit) if limit <= max_rows => query.limit_to(limit),
            Some(limit) => {
                tracing::warn!(limit, max_rows, "limit above the row cap, using the cap");
                if !query.count {
                    query.limit_to(max_rows);
                }
            }
            None => {
                if !query.count {
                    query.limit_to(max_rows);
                }
            }
        }

        if let Some(offset) = limits.offset {
            query.offset_by(offset);
        }
    }
}
