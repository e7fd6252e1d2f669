//! Store Error Types

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Subscriber not found: {subscriber_id}")]
    SubscriberNotFound { subscriber_id: String },

    #[error("Failed to notify {} subscribers: {failed_subscribers:?}", failed_subscribers.len())]
    NotifyFailed { failed_subscribers: Vec<String> },
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
