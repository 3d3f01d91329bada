//! Text backend: human-readable lines through `tracing-subscriber`.

use std::fmt;
use std::io;

use serde_json::Value;
use tracing::{Dispatch, Span};
use tracing_subscriber::fmt::MakeWriter;

use crate::context::RequestContext;
use crate::error::LogError;
use crate::log::render::render_args;
use crate::log::{Level, Logger};

/// Logger that writes formatted text lines, DEBUG and above.
///
/// The fmt subscriber is owned by the instance and only active while a
/// record is emitted, so no global subscriber is installed or required.
/// When the [`RequestContext`] carries a request id the record is emitted
/// inside a `request{id=...}` span.
///
/// # Example
///
/// ```
/// use logbridge::{kv, Logger, RequestContext, TextLogger};
///
/// let logger = TextLogger::new();
/// let ctx = RequestContext::background().with_new_request_id();
/// logger.debug(&ctx, "cache miss", &kv!("key", "user:7"));
/// ```
#[derive(Clone)]
pub struct TextLogger {
    dispatch: Dispatch,
}

impl TextLogger {
    /// Create a text logger writing to standard output.
    pub fn new() -> Self {
        Self::with_writer(io::stdout)
    }

    /// Create a text logger writing to `make_writer`.
    pub fn with_writer<W>(make_writer: W) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(make_writer)
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_target(false)
            .finish();

        Self {
            dispatch: Dispatch::new(subscriber),
        }
    }
}

impl Default for TextLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TextLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextLogger").finish_non_exhaustive()
    }
}

impl Logger for TextLogger {
    fn log(&self, ctx: &RequestContext, level: Level, msg: &str, args: &[Value]) {
        let pairs = render_args(args);

        tracing::dispatcher::with_default(&self.dispatch, || {
            let span = match ctx.request_id() {
                Some(id) => tracing::info_span!("request", id = %id),
                None => Span::none(),
            };
            let _enter = span.enter();

            match level {
                Level::Debug => tracing::debug!("{}{}", msg, pairs),
                Level::Info => tracing::info!("{}{}", msg, pairs),
                Level::Warn => tracing::warn!("{}{}", msg, pairs),
                Level::Error => tracing::error!("{}{}", msg, pairs),
            }
        });
    }

    fn sync(&self) -> Result<(), LogError> {
        Ok(())
    }
}
