//! Reporter that records messages instead of printing them.

use std::sync::{Arc, Mutex};

use schemaforge_core::application::ports::Reporter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Info,
    Warning,
}

/// Captures everything a service reports, in order.
///
/// Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct MemoryReporter {
    messages: Arc<Mutex<Vec<(Level, String)>>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(Level, String)> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }

    /// Messages at one level.
    pub fn at(&self, level: Level) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }

    fn push(&self, level: Level, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push((level, message.to_string()));
        }
    }
}

impl Reporter for MemoryReporter {
    fn success(&self, message: &str) {
        self.push(Level::Success, message);
    }

    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }

    fn warning(&self, message: &str) {
        self.push(Level::Warning, message);
    }
}
