//! Event types for the error store

use serde::Serialize;
use std::sync::Arc;
use std::time::SystemTime;

/// How serious a reported event is. Governs only presentation (icon, color);
/// the store treats all severities identically.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// Opaque unique identifier for a stored event. Assigned by the store at
/// insertion, never reused within a store's lifetime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EventId(pub(crate) u64);

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "evt-{}", self.0)
    }
}

/// Payload for a not-yet-stored event. The store fills in id and timestamp.
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorDraft {
    pub message: String,
    pub severity: Severity,
    pub details: Option<String>,
}

impl ErrorDraft {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            details: None,
        }
    }

    pub fn with_details(
        message: impl Into<String>,
        severity: Severity,
        details: Option<String>,
    ) -> Self {
        Self {
            message: message.into(),
            severity,
            details,
        }
    }
}

/// A stored error event. Immutable after creation.
#[derive(Clone, Debug, Serialize)]
pub struct ErrorEvent {
    pub id: EventId,
    pub message: String,
    pub severity: Severity,
    pub details: Option<String>,
    pub timestamp: SystemTime,
}

impl ErrorEvent {
    pub(crate) fn from_draft(id: EventId, draft: ErrorDraft, timestamp: SystemTime) -> Self {
        Self {
            id,
            message: draft.message,
            severity: draft.severity,
            details: draft.details,
            timestamp,
        }
    }
}

/// Change notification published to store subscribers after every mutation
#[derive(Clone, Debug)]
pub enum StoreChange {
    Added(Arc<ErrorEvent>),
    Removed(EventId),
    Cleared,
}
