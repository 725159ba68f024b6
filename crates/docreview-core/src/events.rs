//! Collaborators the review model talks to: the document viewer, which
//! jumps to and highlights the focused excerpt, and the notifier, which
//! shows acknowledgements to the reviewer.

use std::num::NonZeroU32;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where the viewer should jump and what it should highlight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightTarget {
    pub document_id: String,
    pub attribute_id: String,
    pub page: NonZeroU32,
    pub section: String,
    pub highlighted_text: String,
}

/// Consumer of focus changes. Produces nothing back into the model.
pub trait DocumentViewer {
    fn show(&mut self, target: &HighlightTarget);
}

/// Viewer that discards every target.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullViewer;

impl DocumentViewer for NullViewer {
    fn show(&mut self, _target: &HighlightTarget) {}
}

/// Viewer that keeps every target it was shown, oldest first.
#[derive(Debug, Default, Clone)]
pub struct RecordingViewer {
    pub targets: Vec<HighlightTarget>,
}

impl RecordingViewer {
    pub fn last(&self) -> Option<&HighlightTarget> {
        self.targets.last()
    }
}

impl DocumentViewer for RecordingViewer {
    fn show(&mut self, target: &HighlightTarget) {
        self.targets.push(target.clone());
    }
}

/// Acknowledgements raised by the review actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReviewEvent {
    ValuesAccepted,
    ReviewSaved,
}

impl ReviewEvent {
    pub fn title(self) -> &'static str {
        match self {
            ReviewEvent::ValuesAccepted => "Values Accepted",
            ReviewEvent::ReviewSaved => "Review Saved",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ReviewEvent::ValuesAccepted => "All extracted values have been accepted.",
            ReviewEvent::ReviewSaved => "Your review has been saved successfully.",
        }
    }
}

/// Fire-and-forget sink for [`ReviewEvent`]s.
pub trait Notifier {
    fn notify(&mut self, event: ReviewEvent);
}

/// A notification with the time it was raised.
#[derive(Debug, Clone)]
pub struct NotificationRecord {
    pub event: ReviewEvent,
    pub timestamp: DateTime<Utc>,
}

/// Notifier that keeps every event it receives.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    pub records: Vec<NotificationRecord>,
}

impl RecordingNotifier {
    pub fn events(&self) -> Vec<ReviewEvent> {
        self.records.iter().map(|r| r.event).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, event: ReviewEvent) {
        self.records.push(NotificationRecord {
            event,
            timestamp: Utc::now(),
        });
    }
}
