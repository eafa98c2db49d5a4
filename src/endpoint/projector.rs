use indexmap::IndexMap;

use crate::datastore::{TableSchema, RECORD_NUMBER_COLUMN};
use crate::executor::Row;

pub struct Projector;

impl Projector {
    /// Renders raw rows for output. Unless `show_db_columns` is set, the
    /// record number column is dropped and every column with a non-empty
    /// schema description is renamed to that description. Values, row order
    /// and the order of the remaining keys stay untouched.
    pub fn project_rows(rows: Vec<Row>, schema: &TableSchema, show_db_columns: bool) -> Vec<Row> {
        rows.into_iter()
            .map(|row| Self::project_row(row, schema, show_db_columns))
            .collect()
    }

    fn project_row(row: Row, schema: &TableSchema, show_db_columns: bool) -> Row {
        if show_db_columns {
            return row;
        }

        let mut projected = IndexMap::new();

        for (column, value) in row.0 {
            if column == RECORD_NUMBER_COLUMN {
                continue;
            }

            let key = match schema.description_of(&column) {
                Some(description) if !description.is_empty() => description.to_string(),
                _ => column,
            };

            // a duplicate description overwrites the earlier value but keeps
            // its position
            projected.insert(key, value);
        }

        Row(projected)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use crate::datastore::TableSchema;
    use crate::endpoint::Projector;
    use crate::executor::Row;

    fn mk_row(value: Value) -> Row {
        let Value::Object(object) = value else {
            panic!()
        };
        Row::from(&object)
    }

    fn mk_schema() -> TableSchema {
        let mut schema = TableSchema::default();
        schema.merge_row(&mk_row(json!({
            "record_number": 1,
            "first_name": "Alice",
            "age": 29,
            "city": "Porto"
        })));
        schema.describe("first_name", "First Name");
        schema.describe("city", "");
        schema
    }

    #[test]
    fn test_project_drops_record_number_and_renames() {
        let rows = vec![mk_row(json!({
            "record_number": 1,
            "first_name": "Alice",
            "age": 29,
            "city": "Porto"
        }))];

        let projected = Projector::project_rows(rows, &mk_schema(), false);

        assert_eq!(projected.len(), 1);
        assert_eq!(projected[0].get("First Name"), Some(&json!("Alice")));
        assert_eq!(projected[0].get("record_number"), None);
        assert_eq!(projected[0].get("first_name"), None);
        // empty description keeps the internal name
        assert_eq!(projected[0].get("city"), Some(&json!("Porto")));
    }

    #[test]
    fn test_project_keeps_key_order() {
        let rows = vec![mk_row(json!({
            "record_number": 1,
            "first_name": "Alice",
            "age": 29,
            "city": "Porto"
        }))];

        let projected = Projector::project_rows(rows, &mk_schema(), false);

        assert_eq!(projected[0].columns(), ["age", "city", "First Name"]);
    }

    #[test]
    fn test_project_with_db_columns_is_untouched() {
        let row = mk_row(json!({
            "record_number": 1,
            "first_name": "Alice"
        }));

        let projected = Projector::project_rows(vec![row.clone()], &mk_schema(), true);

        assert_eq!(projected, [row]);
    }

    #[test]
    fn test_project_is_idempotent() {
        let rows = vec![mk_row(json!({
            "record_number": 1,
            "first_name": "Alice",
            "age": 29
        }))];
        let schema = mk_schema();

        let once = Projector::project_rows(rows, &schema, false);
        let twice = Projector::project_rows(once.clone(), &schema, false);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_project_duplicate_description_overwrites_in_place() {
        let mut schema = TableSchema::default();
        schema.merge_row(&mk_row(json!({ "a": 1, "b": 2, "c": 3 })));
        schema.describe("a", "X");
        schema.describe("b", "X");

        let rows = vec![mk_row(json!({ "a": 1, "b": 2, "c": 3 }))];

        let projected = Projector::project_rows(rows, &schema, false);

        assert_eq!(projected[0].columns(), ["X", "c"]);
        assert_eq!(projected[0].get("X"), Some(&json!(2)));
    }

    #[test]
    fn test_project_unknown_columns_pass_through() {
        let rows = vec![mk_row(json!({ "count": 7 }))];

        let projected = Projector::project_rows(rows, &mk_schema(), false);

        assert_eq!(projected[0].get("count"), Some(&json!(7)));
    }
}
