use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Coarse classification of JSON value shapes used by schema inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JsonPrimitive {
    Null,
    Bool,
    Int,
    Float,
    String,
    Object,
    Array,
}

impl JsonPrimitive {
    pub fn of_value(value: &Value) -> JsonPrimitive {
        match value {
            Value::Null => JsonPrimitive::Null,
            Value::Bool(_) => JsonPrimitive::Bool,
            Value::Number(number) => {
                if number.is_i64() || number.is_u64() {
                    JsonPrimitive::Int
                } else {
                    JsonPrimitive::Float
                }
            }
            Value::String(_) => JsonPrimitive::String,
            Value::Array(_) => JsonPrimitive::Array,
            Value::Object(_) => JsonPrimitive::Object,
        }
    }

    /// Common representative of two primitives when merging schemas.
    /// `Int` and `Float` promote to `Float`; otherwise the first seen
    /// non-null type wins, nullability is tracked separately.
    pub fn promote(a: JsonPrimitive, b: JsonPrimitive) -> JsonPrimitive {
        use JsonPrimitive::*;

        if a == b {
            return a;
        }

        match (a, b) {
            (Int, Float) | (Float, Int) => Float,
            (Null, other) => other,
            (other, _) => other,
        }
    }
}
