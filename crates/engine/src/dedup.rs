//! Announced-error set — keeps a persisting failure from flooding the chat.
//!
//! Every error text is announced at most once per process lifetime. The set
//! only grows; it is held in memory and resets on restart.

use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct AnnouncedErrorSet {
    announced: HashSet<String>,
}

impl AnnouncedErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `message` has not been announced yet. Does NOT
    /// mutate state.
    pub fn should_announce(&self, message: &str) -> bool {
        !self.announced.contains(message)
    }

    /// Record that `message` was delivered. Returns `false` if it was
    /// already recorded.
    pub fn record(&mut self, message: &str) -> bool {
        let inserted = self.announced.insert(message.to_string());
        if !inserted {
            tracing::debug!(message, "Error text already recorded as announced");
        }
        inserted
    }

    pub fn len(&self) -> usize {
        self.announced.len()
    }

    pub fn is_empty(&self) -> bool {
        self.announced.is_empty()
    }
}
