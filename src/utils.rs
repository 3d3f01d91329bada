//! Small string helpers.

use serde_json::Value;

use crate::context::RequestContext;

/// Get the string stored under `key` in `ctx`.
///
/// Returns an empty string when the key is absent or holds a non-string value.
pub fn get_string_value(ctx: &RequestContext, key: &str) -> String {
    match ctx.value(key) {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

/// Dereference an optional string, defaulting to empty.
pub fn string_value(v: Option<&str>) -> String {
    v.unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_string_value() {
        let ctx = RequestContext::background()
            .with_value("user", "ada")
            .with_value("count", 3)
            .with_value("flag", true);

        assert_eq!(get_string_value(&ctx, "user"), "ada");
        assert_eq!(get_string_value(&ctx, "count"), "");
        assert_eq!(get_string_value(&ctx, "flag"), "");
        assert_eq!(get_string_value(&ctx, "missing"), "");
    }

    #[test]
    fn test_string_value() {
        assert_eq!(string_value(None), "");
        assert_eq!(string_value(Some("x")), "x");

        let owned: Option<String> = Some("owned".to_string());
        assert_eq!(string_value(owned.as_deref()), "owned");
    }
}
