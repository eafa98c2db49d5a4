use ordered_float::OrderedFloat;
use serde_json::Value;

pub struct Helpers;

impl Helpers {
    // Sort comparator over JSON values. Nulls sort last whichever way the
    // direction flag points.
    pub fn cmp_json_for_sort(a: &Value, b: &Value, ascending: bool) -> std::cmp::Ordering {
        use serde_json::Value::*;
        use std::cmp::Ordering::*;

        match (a, b) {
            (Null, Null) => Equal,
            (Null, _) => Greater,
            (_, Null) => Less,
            (Bool(x), Bool(y)) => {
                if ascending {
                    x.cmp(y)
                } else {
                    y.cmp(x)
                }
            }
            (Number(x), Number(y)) => {
                let ax = OrderedFloat(x.as_f64().unwrap_or(f64::NAN));
                let by = OrderedFloat(y.as_f64().unwrap_or(f64::NAN));
                let ord = ax.cmp(&by);
                if ascending { ord } else { ord.reverse() }
            }
            (String(x), String(y)) => {
                let ord = x.cmp(y);
                if ascending { ord } else { ord.reverse() }
            }
            // containers compare by their serialized form to keep the order
            // total and stable
            (Array(_), Array(_)) | (Object(_), Object(_)) => {
                let sa = serde_json::to_string(a).unwrap_or_default();
                let sb = serde_json::to_string(b).unwrap_or_default();
                let ord = sa.cmp(&sb);
                if ascending { ord } else { ord.reverse() }
            }
            (lhs, rhs) => {
                let ord = Self::type_rank(lhs).cmp(&Self::type_rank(rhs));
                if ascending { ord } else { ord.reverse() }
            }
        }
    }

    /// Equality between a stored value and the quoted literal of a
    /// condition. Strings compare directly, numbers and booleans through
    /// their canonical text form. Nulls and containers never match.
    pub fn value_matches(stored: &Value, literal: &str) -> bool {
        match stored {
            Value::String(text) => text == literal,
            Value::Number(number) => number.to_string() == literal,
            Value::Bool(flag) => flag.to_string() == literal,
            _ => false,
        }
    }

    fn type_rank(value: &Value) -> u8 {
        match value {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Number(_) => 2,
            Value::String(_) => 3,
            Value::Array(_) => 4,
            Value::Object(_) => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use std::cmp::Ordering::*;

    use crate::executor::Helpers;

    #[test]
    fn sort_nulls_last_in_ascending_and_descending() {
        let n = Value::Null;
        let z = json!(0);

        assert_eq!(Helpers::cmp_json_for_sort(&z, &n, true), Less);
        assert_eq!(Helpers::cmp_json_for_sort(&n, &z, true), Greater);
        assert_eq!(Helpers::cmp_json_for_sort(&n, &n, true), Equal);

        // descending keeps nulls at the end too
        assert_eq!(Helpers::cmp_json_for_sort(&z, &n, false), Less);
        assert_eq!(Helpers::cmp_json_for_sort(&n, &z, false), Greater);
        assert_eq!(Helpers::cmp_json_for_sort(&n, &n, false), Equal);
    }

    #[test]
    fn sort_numbers_respects_ascending_and_descending() {
        let a = json!(1.5);
        let b = json!(2);

        assert_eq!(Helpers::cmp_json_for_sort(&a, &b, true), Less);
        assert_eq!(Helpers::cmp_json_for_sort(&a, &b, false), Greater);
        assert_eq!(Helpers::cmp_json_for_sort(&a, &a, true), Equal);
    }

    #[test]
    fn sort_strings_is_lexicographic_and_directional() {
        let a = json!("Alice");
        let b = json!("Bob");

        assert_eq!(Helpers::cmp_json_for_sort(&a, &b, true), Less);
        assert_eq!(Helpers::cmp_json_for_sort(&a, &b, false), Greater);
    }

    #[test]
    fn sort_bools_false_before_true_in_ascending() {
        let f = json!(false);
        let t = json!(true);

        assert_eq!(Helpers::cmp_json_for_sort(&f, &t, true), Less);
        assert_eq!(Helpers::cmp_json_for_sort(&f, &t, false), Greater);
    }

    #[test]
    fn cross_type_order_uses_type_rank() {
        let v_bool = json!(true);
        let v_num = json!(0);
        let v_str = json!("s");

        assert_eq!(Helpers::cmp_json_for_sort(&v_bool, &v_num, true), Less);
        assert_eq!(Helpers::cmp_json_for_sort(&v_num, &v_str, true), Less);
        assert_eq!(Helpers::cmp_json_for_sort(&v_str, &v_num, false), Less);
    }

    #[test]
    fn value_matches_strings_directly() {
        assert!(Helpers::value_matches(&json!("Porto"), "Porto"));
        assert!(!Helpers::value_matches(&json!("Porto"), "porto"));
    }

    #[test]
    fn value_matches_numbers_by_canonical_form() {
        assert!(Helpers::value_matches(&json!(42), "42"));
        assert!(Helpers::value_matches(&json!(1.5), "1.5"));
        assert!(!Helpers::value_matches(&json!(42), "042"));
    }

    #[test]
    fn value_matches_bools_by_canonical_form() {
        assert!(Helpers::value_matches(&json!(true), "true"));
        assert!(!Helpers::value_matches(&json!(true), "TRUE"));
    }

    #[test]
    fn value_never_matches_null_or_containers() {
        assert!(!Helpers::value_matches(&Value::Null, "null"));
        assert!(!Helpers::value_matches(&json!([1]), "[1]"));
        assert!(!Helpers::value_matches(&json!({"a": 1}), "a"));
    }
}
