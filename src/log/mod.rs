//! Logging capability and its backends.
//!
//! # Data Flow
//! ```text
//! call site: logger.info(&ctx, "msg", &kv!("user", 42))
//!     → Logger::log (level, message, flat key/value arguments)
//!     → TextLogger: render.rs (key=value text) → tracing fmt → stdout
//!     → JsonLogger: field.rs (fields) → JSON record → sink.rs → flush on sync
//! ```
//!
//! # Design Decisions
//! - Components hold an `Arc<dyn Logger>`; the variant is chosen at construction
//! - Arguments stay loosely typed (`serde_json::Value`) so malformed pairs
//!   degrade instead of failing
//! - Each backend owns its output; nothing here installs a global subscriber

mod field;
mod json;
mod level;
mod render;
mod sink;
mod text;
mod r#trait;

pub use field::{arg_value, fields_from_args, Field};
pub use json::JsonLogger;
pub use level::Level;
pub use r#trait::Logger;
pub use sink::{Sink, DEFAULT_BUFFER_CAPACITY};
pub use text::TextLogger;

/// Build a flat key/value argument array from Rust expressions.
///
/// Each expression is converted with `serde_json::to_value`, so any
/// serializable value works in either position. A value that fails to
/// serialize is logged as `"!ERROR: <reason>"`.
///
/// ```
/// use logbridge::kv;
///
/// let args = kv!("user", 42, "ok", true);
/// assert_eq!(args.len(), 4);
/// ```
#[macro_export]
macro_rules! kv {
    () => {{
        let args: [$crate::__serde_json::Value; 0] = [];
        args
    }};
    ($($arg:expr),+ $(,)?) => {
        [$($crate::log::arg_value(&$arg)),+]
    };
}
