//! The logging capability injected into the client.
//!
//! Any type implementing [`Logger`] can be supplied through the `logger`
//! configuration option. When none is supplied the shared [`NullLogger`]
//! is used.

use std::sync::{Arc, OnceLock};

use crate::models::Response;

/// Receives the responses the client accepts as successful.
pub trait Logger: Send + Sync {
    /// Records an informational event.
    fn info(&self, event: &Response);
}

/// A logger that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl NullLogger {
    /// Returns the process-wide no-op logger.
    ///
    /// Every call returns a handle to the same allocation, so a resolved
    /// configuration can be checked against it with [`Arc::ptr_eq`].
    pub fn shared() -> Arc<dyn Logger> {
        static INSTANCE: OnceLock<Arc<dyn Logger>> = OnceLock::new();
        Arc::clone(INSTANCE.get_or_init(|| Arc::new(NullLogger)))
    }
}

impl Logger for NullLogger {
    fn info(&self, _event: &Response) {}
}

/// Forwards events to `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, event: &Response) {
        tracing::info!(
            status = event.status(),
            body = %event.body(),
            "Zendesk response"
        );
    }
}
