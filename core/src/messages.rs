//! Append-only advisory log shown to the user.
//!
//! The log is shared through an `Arc` by every service that reports to it.
//! It is never consulted for error recovery.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

/// Ordered message log with no eviction.
#[derive(Debug, Default)]
pub struct MessageService {
    messages: Mutex<Vec<String>>,
}

impl MessageService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, message: impl Into<String>) {
        let message = message.into();
        debug!(%message, "message added");
        self.lock().push(message);
    }

    /// Snapshot of all messages in insertion order.
    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        // A panicking writer cannot leave a Vec<String> half-updated.
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
