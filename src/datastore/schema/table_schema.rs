use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::datastore::FieldInfo;
use crate::executor::Row;

/// Inferred schema of a registered table. Columns are keyed by name in
/// first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    pub fields: IndexMap<String, FieldInfo>,
}

impl TableSchema {
    pub fn get(&self, name: &str) -> Option<&FieldInfo> {
        self.fields.get(name)
    }

    /// Merges one row into the schema. Columns the row does not carry turn
    /// nullable, present columns promote their type where necessary and new
    /// columns are appended.
    pub fn merge_row(&mut self, row: &Row) {
        for (column, field_info) in self.fields.iter_mut() {
            if !row.contains_column(column) {
                field_info.nullable = true;
            }
        }

        for (column, value) in &row.0 {
            let new_info = FieldInfo::infer_field_info(value);
            match self.fields.get_mut(column) {
                Some(old) => {
                    *old = old.merge_field_info(&new_info);
                }
                None => {
                    self.fields.insert(column.clone(), new_info);
                }
            }
        }
    }

    /// Attaches a display label to a column. Unknown columns are ignored.
    pub fn describe(&mut self, column: &str, label: &str) {
        if let Some(field_info) = self.fields.get_mut(column) {
            field_info.description = Some(label.to_string());
        }
    }

    pub fn description_of(&self, column: &str) -> Option<&str> {
        self.get(column).and_then(|field_info| field_info.description.as_deref())
    }
}
