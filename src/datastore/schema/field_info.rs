use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::datastore::JsonPrimitive;

/// Inferred metadata of one column. `description` carries the display alias
/// the projector substitutes for the column name, when one was declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldInfo {
    pub ty: JsonPrimitive,
    pub nullable: bool,
    pub description: Option<String>,
}

impl FieldInfo {
    pub fn infer_field_info(value: &Value) -> FieldInfo {
        let ty = JsonPrimitive::of_value(value);
        FieldInfo {
            ty,
            nullable: ty == JsonPrimitive::Null,
            description: None,
        }
    }

    pub fn merge_field_info(&self, new: &FieldInfo) -> FieldInfo {
        let promoted = JsonPrimitive::promote(self.ty, new.ty);
        FieldInfo {
            ty: if promoted == JsonPrimitive::Null { self.ty } else { promoted },
            nullable: self.nullable || new.nullable || new.ty == JsonPrimitive::Null,
            description: self.description.clone().or_else(|| new.description.clone()),
        }
    }
}
