//! Buffered output shared by the JSON backend.

use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::sync::Mutex;

use crate::config::schema::OutputTarget;
use crate::error::{LogError, LogResult};

/// Default buffer capacity in bytes.
pub const DEFAULT_BUFFER_CAPACITY: usize = 8 * 1024;

/// A buffered writer that serializes whole records.
///
/// Records stay in the buffer until it fills or [`Sink::flush`] is called.
/// Dropping the sink flushes whatever remains, ignoring errors.
pub struct Sink {
    inner: Mutex<BufWriter<Box<dyn Write + Send>>>,
}

impl Sink {
    /// Wrap `writer` with a buffer of `capacity` bytes.
    pub fn new(writer: Box<dyn Write + Send>, capacity: usize) -> Self {
        Self {
            inner: Mutex::new(BufWriter::with_capacity(capacity, writer)),
        }
    }

    /// Open the configured output target.
    ///
    /// Files are opened in append mode and created if missing.
    pub fn open(target: &OutputTarget, capacity: usize) -> LogResult<Self> {
        let writer: Box<dyn Write + Send> = match target {
            OutputTarget::Stdout => Box::new(io::stdout()),
            OutputTarget::Stderr => Box::new(io::stderr()),
            OutputTarget::File(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|source| LogError::Open {
                        path: path.clone(),
                        source,
                    })?;
                Box::new(file)
            }
        };

        Ok(Self::new(writer, capacity))
    }

    /// Append one complete record.
    pub fn write_record(&self, record: &[u8]) -> LogResult<()> {
        let mut writer = self.inner.lock().map_err(|_| LogError::Poisoned)?;
        writer.write_all(record).map_err(LogError::Write)
    }

    /// Flush buffered records to the underlying writer.
    pub fn flush(&self) -> LogResult<()> {
        let mut writer = self.inner.lock().map_err(|_| LogError::Poisoned)?;
        writer.flush().map_err(LogError::Flush)
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink").finish_non_exhaustive()
    }
}
