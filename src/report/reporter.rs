//! ErrorReporter implementation

use crate::report::normalize::{normalize, CaughtFailure};
use crate::store::{ErrorDraft, ErrorEvent, ErrorStore, EventId, Severity};
use std::sync::Arc;

/// The producer surface the rest of an application reports problems
/// through, shielding callers from store internals.
///
/// Cheap to clone; clones share the same store. Reporting is
/// fire-and-forget and every reported event is mirrored into the
/// application log at its severity level.
#[derive(Clone)]
pub struct ErrorReporter {
    store: Arc<ErrorStore>,
}

impl ErrorReporter {
    pub fn new(store: Arc<ErrorStore>) -> Self {
        Self { store }
    }

    /// The underlying store, for consumers that need to subscribe to changes
    pub fn store(&self) -> &Arc<ErrorStore> {
        &self.store
    }

    /// Generic entry point: report a fully-specified draft
    pub fn show(&self, draft: ErrorDraft) {
        match draft.severity {
            Severity::Error => log::error!("{}", draft.message),
            Severity::Warning => log::warn!("{}", draft.message),
            Severity::Info => log::info!("{}", draft.message),
        }
        self.store.add(draft);
    }

    /// Report an error-severity event
    pub fn show_error(&self, message: impl Into<String>, details: Option<String>) {
        self.show(ErrorDraft::with_details(message, Severity::Error, details));
    }

    /// Report a warning-severity event
    pub fn show_warning(&self, message: impl Into<String>, details: Option<String>) {
        self.show(ErrorDraft::with_details(message, Severity::Warning, details));
    }

    /// Report an info-severity event
    pub fn show_info(&self, message: impl Into<String>, details: Option<String>) {
        self.show(ErrorDraft::with_details(message, Severity::Info, details));
    }

    /// Dismiss a single event by id. Idempotent.
    pub fn dismiss(&self, id: EventId) {
        self.store.remove(id);
    }

    /// Dismiss every event
    pub fn clear(&self) {
        self.store.clear();
    }

    /// Normalize an arbitrary caught failure and report it at error
    /// severity. `fallback` is used when the failure has no recognizable
    /// shape; the priority chain is documented on [`CaughtFailure`].
    pub fn handle_api_error(&self, failure: impl Into<CaughtFailure>, fallback: Option<&str>) {
        let normalized = normalize(failure.into(), fallback);
        self.show_error(normalized.message, normalized.details);
    }

    /// All current events, newest first
    pub fn errors(&self) -> Vec<Arc<ErrorEvent>> {
        self.store.events()
    }

    pub fn has_errors(&self) -> bool {
        !self.store.is_empty()
    }

    /// The newest event, if any
    pub fn latest_error(&self) -> Option<Arc<ErrorEvent>> {
        self.store.latest()
    }
}
