use serde_json::Value;

use crate::executor::{Helpers, Row};
use crate::query::{Condition, Query, SortDirection};

pub struct QueryExecutor;

impl QueryExecutor {
    /// Runs a canonical query over a snapshot of rows. The pipeline is
    /// filter, stable sort, count, offset, limit and column projection, in
    /// that order.
    pub fn execute(query: &Query, rows: Vec<Row>) -> Vec<Row> {
        let mut rows: Vec<Row> = rows
            .into_iter()
            .filter(|row| Self::matches(row, &query.conditions))
            .collect();

        if let Some(order) = &query.order_by {
            let ascending = order.direction == SortDirection::Ascending;
            rows.sort_by(|a, b| {
                Helpers::cmp_json_for_sort(
                    a.get(&order.property).unwrap_or(&Value::Null),
                    b.get(&order.property).unwrap_or(&Value::Null),
                    ascending,
                )
            });
        }

        if query.count {
            rows = vec![Self::count_row(rows.len())];
        }

        let start = query.offset.unwrap_or(0).min(rows.len());
        let end = match query.limit {
            // an unbounded row cap lets the limit reach usize::MAX
            Some(limit) => start.saturating_add(limit).min(rows.len()),
            None => rows.len(),
        };
        let mut rows = rows.get(start..end).unwrap_or(&[]).to_vec();

        if !query.count && !query.properties.is_empty() {
            rows = rows
                .into_iter()
                .map(|row| Self::project_columns(row, &query.properties))
                .collect();
        }

        rows
    }

    fn matches(row: &Row, conditions: &[Condition]) -> bool {
        conditions.iter().all(|condition| {
            row.get(&condition.property)
                .map(|value| Helpers::value_matches(value, &condition.value))
                .unwrap_or(false)
        })
    }

    fn count_row(total: usize) -> Row {
        let mut row = Row::default();
        row.insert("count", Value::from(total));
        row
    }

    /// Missing columns project as null so every output row carries the full
    /// selected shape.
    fn project_columns(row: Row, properties: &[String]) -> Row {
        let mut projected = Row::default();
        for property in properties {
            let value = row.get(property).cloned().unwrap_or(Value::Null);
            projected.insert(property, value);
        }
        projected
    }
}
