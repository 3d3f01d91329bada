//! Structured backend: one JSON object per record.

use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::{json, Map, Value};

use crate::config::schema::JsonConfig;
use crate::context::RequestContext;
use crate::error::LogError;
use crate::log::sink::{Sink, DEFAULT_BUFFER_CAPACITY};
use crate::log::{fields_from_args, Level, Logger};

/// Logger that writes buffered JSON lines.
///
/// Each record looks like
/// `{"level":"info","ts":1760000000.123,"msg":"...","key":value,...}`.
/// Arguments become fields through [`fields_from_args`], so malformed pairs
/// are dropped. Records below the configured level are discarded.
/// Output is only guaranteed to reach its destination after [`Logger::sync`].
#[derive(Debug)]
pub struct JsonLogger {
    level: Level,
    sink: Sink,
}

impl JsonLogger {
    /// Create a logger with the default configuration (info, stderr).
    pub fn new() -> Result<Self, LogError> {
        Self::from_config(&JsonConfig::default())
    }

    /// Create a logger from `config`.
    ///
    /// Fails when the level is unknown or the output file cannot be opened.
    pub fn from_config(config: &JsonConfig) -> Result<Self, LogError> {
        let level: Level = config.level.parse()?;
        let sink = Sink::open(&config.output, config.buffer_capacity)?;

        tracing::debug!(
            level = %level,
            output = %config.output,
            buffer_capacity = config.buffer_capacity,
            "JSON logger initialized"
        );

        Ok(Self { level, sink })
    }

    /// Create a logger writing to `writer` with the default buffer size.
    pub fn with_writer<W>(writer: W, level: Level) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            level,
            sink: Sink::new(Box::new(writer), DEFAULT_BUFFER_CAPACITY),
        }
    }

    /// Minimum level that is written.
    pub fn level(&self) -> Level {
        self.level
    }

    fn encode(level: Level, msg: &str, args: &[Value]) -> Map<String, Value> {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs_f64();

        let mut record = Map::new();
        record.insert("level".to_string(), json!(level.as_str()));
        record.insert("ts".to_string(), json!(ts));
        record.insert("msg".to_string(), json!(msg));

        for field in fields_from_args(args) {
            record.insert(field.key, field.value);
        }

        record
    }
}

impl Logger for JsonLogger {
    fn log(&self, _ctx: &RequestContext, level: Level, msg: &str, args: &[Value]) {
        if level < self.level {
            return;
        }

        let record = Value::Object(Self::encode(level, msg, args));
        let mut line = match serde_json::to_vec(&record) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to encode log record");
                return;
            }
        };
        line.push(b'\n');

        if let Err(e) = self.sink.write_record(&line) {
            tracing::warn!(error = %e, "Dropped log record");
        }
    }

    fn sync(&self) -> Result<(), LogError> {
        self.sink.flush()
    }
}
