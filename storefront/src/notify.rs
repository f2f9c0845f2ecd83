//! User-visible notification port
//!
//! Cart and checkout feedback (the UI's toast layer) goes through this trait
//! so the engine stays presentation-agnostic and tests can capture notices.

use std::sync::Arc;

/// A single user-visible notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: Option<String>,
}

impl Notice {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Default notifier that reports through `tracing`
#[derive(Debug, Default, Clone)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        match &notice.description {
            Some(description) => {
                tracing::info!(title = %notice.title, description = %description, "notice")
            }
            None => tracing::info!(title = %notice.title, "notice"),
        }
    }
}

/// Captures notices for assertions in tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    notices: Arc<parking_lot::Mutex<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().push(notice);
    }
}
