//! Request-scoped context.
//!
//! # Responsibilities
//! - Carry request-scoped values (string keys, loosely typed values)
//! - Carry the request ID used to correlate log lines
//! - Carry an optional deadline and a shared cancellation flag
//!
//! # Design Decisions
//! - Builder-style `with_*` methods take the context by value and return it
//! - Clones share one cancellation flag, so cancelling any clone cancels all
//! - Values are `serde_json::Value`, lookups never fail on a type mismatch

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::Value;
use uuid::Uuid;

/// Context passed to every logging call.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    values: HashMap<String, Value>,
    request_id: Option<Uuid>,
    deadline: Option<Instant>,
    cancelled: Arc<AtomicBool>,
}

impl RequestContext {
    /// An empty context: no values, no deadline, never cancelled.
    pub fn background() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, replacing any previous value.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Look up the value stored under `key`.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn with_request_id(mut self, id: Uuid) -> Self {
        self.request_id = Some(id);
        self
    }

    /// Attach a freshly generated (v4) request ID.
    pub fn with_new_request_id(self) -> Self {
        self.with_request_id(Uuid::new_v4())
    }

    pub fn request_id(&self) -> Option<Uuid> {
        self.request_id
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Set the deadline `timeout` from now.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// True once the deadline has passed. Always false without a deadline.
    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Cancel this context and every clone of it.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}
