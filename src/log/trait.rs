//! Logger trait definition.

use serde_json::Value;

use crate::context::RequestContext;
use crate::error::LogError;
use crate::log::Level;

/// Logging interface shared by every backend.
///
/// `args` is a flat sequence of alternating keys and values. How malformed
/// pairs are treated is up to the backend, but it never fails the call.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so one instance can be shared
/// across threads behind an `Arc<dyn Logger>`.
///
/// # Example
///
/// ```
/// use logbridge::{kv, Logger, RequestContext, TextLogger};
/// use std::sync::Arc;
///
/// let logger: Arc<dyn Logger> = Arc::new(TextLogger::new());
/// let ctx = RequestContext::background();
/// logger.info(&ctx, "user signed in", &kv!("user", "ada", "attempt", 2));
/// logger.sync().unwrap();
/// ```
pub trait Logger: Send + Sync {
    /// Emit one record at `level`.
    fn log(&self, ctx: &RequestContext, level: Level, msg: &str, args: &[Value]);

    /// Flush buffered output.
    fn sync(&self) -> Result<(), LogError>;

    fn debug(&self, ctx: &RequestContext, msg: &str, args: &[Value]) {
        self.log(ctx, Level::Debug, msg, args);
    }

    fn info(&self, ctx: &RequestContext, msg: &str, args: &[Value]) {
        self.log(ctx, Level::Info, msg, args);
    }

    fn warn(&self, ctx: &RequestContext, msg: &str, args: &[Value]) {
        self.log(ctx, Level::Warn, msg, args);
    }

    fn error(&self, ctx: &RequestContext, msg: &str, args: &[Value]) {
        self.log(ctx, Level::Error, msg, args);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recording {
        records: Mutex<Vec<(Level, String, usize)>>,
    }

    impl Logger for Recording {
        fn log(&self, _ctx: &RequestContext, level: Level, msg: &str, args: &[Value]) {
            self.records
                .lock()
                .unwrap()
                .push((level, msg.to_string(), args.len()));
        }

        fn sync(&self) -> Result<(), LogError> {
            Ok(())
        }
    }

    #[test]
    fn test_provided_methods_forward_level() {
        let logger = Recording::default();
        let ctx = RequestContext::background();

        logger.debug(&ctx, "d", &[]);
        logger.info(&ctx, "i", &crate::kv!("a", 1));
        logger.warn(&ctx, "w", &[]);
        logger.error(&ctx, "e", &crate::kv!("a", 1, "b"));

        let records = logger.records.lock().unwrap();
        assert_eq!(
            *records,
            vec![
                (Level::Debug, "d".to_string(), 0),
                (Level::Info, "i".to_string(), 2),
                (Level::Warn, "w".to_string(), 0),
                (Level::Error, "e".to_string(), 3),
            ]
        );
    }

    #[test]
    fn test_logger_is_object_safe() {
        let logger: Box<dyn Logger> = Box::new(Recording::default());
        logger.info(&RequestContext::background(), "boxed", &[]);
        assert!(logger.sync().is_ok());
    }
}
