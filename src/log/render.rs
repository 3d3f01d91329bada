//! Human-readable `key=value` rendering for the text backend.

use std::fmt::Write as _;

use serde_json::Value;

/// Key used for arguments that do not form a well-formed pair.
pub(crate) const BAD_KEY: &str = "!BADKEY";

/// Render flat key/value arguments as ` key=value` pairs.
///
/// A string followed by another argument forms a pair. A lone trailing
/// string, or any non-string in key position, is rendered under
/// [`BAD_KEY`] and consumes a single argument.
pub(crate) fn render_args(args: &[Value]) -> String {
    let mut out = String::new();
    let mut rest = args;

    while let Some((first, tail)) = rest.split_first() {
        match (first, tail.split_first()) {
            (Value::String(key), Some((value, tail))) => {
                push_pair(&mut out, key, value);
                rest = tail;
            }
            _ => {
                push_pair(&mut out, BAD_KEY, first);
                rest = tail;
            }
        }
    }

    out
}

fn push_pair(out: &mut String, key: &str, value: &Value) {
    out.push(' ');
    push_text(out, key);
    out.push('=');
    match value {
        Value::String(s) => push_text(out, s),
        other => {
            let _ = write!(out, "{}", other);
        }
    }
}

fn push_text(out: &mut String, s: &str) {
    if needs_quoting(s) {
        let _ = write!(out, "{:?}", s);
    } else {
        out.push_str(s);
    }
}

fn needs_quoting(s: &str) -> bool {
    s.is_empty()
        || s.chars()
            .any(|c| c.is_whitespace() || c.is_control() || c == '=' || c == '"')
}
