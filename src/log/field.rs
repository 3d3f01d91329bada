//! Conversion of flat key/value arguments into structured fields.

use serde::Serialize;
use serde_json::Value;

/// A structured key/value unit attached to a log record.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub key: String,
    pub value: Value,
}

impl Field {
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Convert alternating key/value arguments into fields.
///
/// Arguments are taken in pairs from even indices. A pair whose key is not
/// a string is dropped, and a trailing unpaired argument produces nothing.
pub fn fields_from_args(args: &[Value]) -> Vec<Field> {
    args.chunks_exact(2)
        .filter_map(|pair| match &pair[0] {
            Value::String(key) => Some(Field::new(key.clone(), pair[1].clone())),
            _ => None,
        })
        .collect()
}

/// Convert one `kv!` argument to a JSON value.
///
/// A value that fails to serialize becomes `"!ERROR: <reason>"` instead of
/// failing the logging call.
#[doc(hidden)]
pub fn arg_value<T: Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|e| Value::String(format!("!ERROR: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_well_formed_pairs_keep_order() {
        let args = crate::kv!("a", 1, "b", "two", "c", [1, 2], "d", Value::Null);
        let fields = fields_from_args(&args);

        assert_eq!(
            fields,
            vec![
                Field::new("a", json!(1)),
                Field::new("b", json!("two")),
                Field::new("c", json!([1, 2])),
                Field::new("d", Value::Null),
            ]
        );
    }

    #[test]
    fn test_trailing_value_is_dropped() {
        let fields = fields_from_args(&crate::kv!("a", 1, "b", "two", 3));

        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0], Field::new("a", json!(1)));
        assert_eq!(fields[1], Field::new("b", json!("two")));
    }

    #[test]
    fn test_non_string_key_drops_pair() {
        assert!(fields_from_args(&crate::kv!(42, "x")).is_empty());

        let fields = fields_from_args(&crate::kv!(true, "skip", "kept", 7));
        assert_eq!(fields, vec![Field::new("kept", json!(7))]);
    }

    #[test]
    fn test_empty_and_single() {
        assert!(fields_from_args(&[]).is_empty());
        assert!(fields_from_args(&crate::kv!("lonely")).is_empty());
    }

    #[test]
    fn test_unserializable_argument_degrades() {
        use std::collections::HashMap;

        let grid: HashMap<(u8, u8), u8> = HashMap::from([((1, 2), 3)]);
        let args = crate::kv!("grid", grid, "after", 1);

        assert_eq!(args[0], json!("grid"));
        let rendered = args[1].as_str().unwrap();
        assert!(rendered.starts_with("!ERROR: "), "got {}", rendered);
        assert!(rendered.contains("key must be a string"));

        let fields = fields_from_args(&args);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[1], Field::new("after", json!(1)));
    }

    #[test]
    fn test_count_is_half_for_valid_args() {
        for n in 0..10usize {
            let args: Vec<Value> = (0..n)
                .map(|i| if i % 2 == 0 { json!(format!("k{}", i)) } else { json!(i) })
                .collect();
            assert_eq!(fields_from_args(&args).len(), n / 2);
        }
    }
}
