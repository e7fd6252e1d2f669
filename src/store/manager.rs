//! ErrorStore implementation

use crate::core::time::{SystemTimeProvider, TimeProvider};
use crate::store::error::{StoreError, StoreResult};
use crate::store::event::{ErrorDraft, ErrorEvent, EventId, StoreChange};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

struct SubscriberInfo {
    source: String,
    sender: UnboundedSender<StoreChange>,
}

/// Canonical ordered collection of current error events.
///
/// Head of the collection is always the newest event. All mutations go
/// through [`add`](Self::add), [`remove`](Self::remove) and
/// [`clear`](Self::clear); every mutation is followed by a [`StoreChange`]
/// notification to all registered subscribers.
///
/// # Thread Safety
///
/// The store is `Send + Sync` and can be shared as `Arc<ErrorStore>`.
/// Mutations are serialized by interior locks; single-threaded hosts pay
/// only uncontended lock costs. Event payloads are `Arc`-wrapped so reads
/// are zero-copy snapshots.
pub struct ErrorStore {
    /// Monotonic id counter; ids are never reused
    next_id: AtomicU64,
    /// Event collection, newest first
    events: RwLock<VecDeque<Arc<ErrorEvent>>>,
    /// Change subscribers keyed by subscriber id
    subscribers: RwLock<HashMap<String, SubscriberInfo>>,
    clock: Arc<dyn TimeProvider>,
}

impl Default for ErrorStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorStore {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemTimeProvider))
    }

    /// Create a store with an explicit time source (used by tests to pin
    /// event timestamps)
    pub fn with_clock(clock: Arc<dyn TimeProvider>) -> Self {
        Self {
            next_id: AtomicU64::new(1), // Start from 1, ids read as evt-1, evt-2, ...
            events: RwLock::new(VecDeque::new()),
            subscribers: RwLock::new(HashMap::new()),
            clock,
        }
    }

    /// Construct an event from the draft and prepend it to the collection.
    ///
    /// Assigns a fresh id and the current timestamp. Cannot fail; an empty
    /// message is accepted as-is.
    pub fn add(&self, draft: ErrorDraft) -> Arc<ErrorEvent> {
        let id = EventId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let event = Arc::new(ErrorEvent::from_draft(id, draft, self.clock.system_time()));

        {
            let mut events = self.events.write().unwrap();
            events.push_front(event.clone());
        }

        log::debug!(
            "Stored {} event {} ({} total)",
            event.severity,
            event.id,
            self.len()
        );
        self.notify(StoreChange::Added(event.clone()));
        event
    }

    /// Remove the event with the given id.
    ///
    /// Idempotent: returns false and stays silent when the id is absent,
    /// since a dismiss action and an auto-hide timer can race to remove the
    /// same event.
    pub fn remove(&self, id: EventId) -> bool {
        let removed = {
            let mut events = self.events.write().unwrap();
            match events.iter().position(|event| event.id == id) {
                Some(index) => {
                    events.remove(index);
                    true
                }
                None => false,
            }
        };

        if removed {
            log::trace!("Removed event {}", id);
            self.notify(StoreChange::Removed(id));
        }
        removed
    }

    /// Empty the collection unconditionally
    pub fn clear(&self) {
        let count = {
            let mut events = self.events.write().unwrap();
            let count = events.len();
            events.clear();
            count
        };

        log::debug!("Cleared {} events", count);
        self.notify(StoreChange::Cleared);
    }

    /// Snapshot of all events, newest first
    pub fn events(&self) -> Vec<Arc<ErrorEvent>> {
        self.events.read().unwrap().iter().cloned().collect()
    }

    /// The newest event, if any
    pub fn latest(&self) -> Option<Arc<ErrorEvent>> {
        self.events.read().unwrap().front().cloned()
    }

    pub fn len(&self) -> usize {
        self.events.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.read().unwrap().is_empty()
    }

    /// Register a change subscriber.
    ///
    /// Returns the receiving end of an unbounded channel that sees every
    /// subsequent mutation. Re-using a subscriber id replaces the previous
    /// subscription with a warning.
    pub fn subscribe(
        &self,
        subscriber_id: String,
        source: String,
    ) -> StoreResult<UnboundedReceiver<StoreChange>> {
        let (sender, receiver) = unbounded_channel();

        let info = SubscriberInfo {
            source: source.clone(),
            sender,
        };

        let mut subscribers = self.subscribers.write().unwrap();
        if let Some(existing) = subscribers.insert(subscriber_id.clone(), info) {
            log::warn!(
                "Subscriber '{}' replaced existing subscription (source: {} -> {})",
                subscriber_id,
                existing.source,
                source
            );
        }

        Ok(receiver)
    }

    /// Remove a subscriber registration
    pub fn unsubscribe(&self, subscriber_id: &str) -> StoreResult<()> {
        let mut subscribers = self.subscribers.write().unwrap();
        match subscribers.remove(subscriber_id) {
            Some(_) => Ok(()),
            None => Err(StoreError::SubscriberNotFound {
                subscriber_id: subscriber_id.to_string(),
            }),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().unwrap().len()
    }

    pub fn has_subscriber(&self, subscriber_id: &str) -> bool {
        self.subscribers.read().unwrap().contains_key(subscriber_id)
    }

    /// Fan a change out to all subscribers, pruning any whose channel has
    /// closed. Mutations themselves never fail, so delivery problems are
    /// logged rather than surfaced to producers.
    fn notify(&self, change: StoreChange) {
        if let Err(StoreError::NotifyFailed { failed_subscribers }) = self.try_notify(change) {
            log::warn!(
                "Pruned {} store subscribers with closed channels: {:?}",
                failed_subscribers.len(),
                failed_subscribers
            );
        }
    }

    fn try_notify(&self, change: StoreChange) -> StoreResult<()> {
        let mut failed_subscribers = Vec::new();

        {
            let subscribers = self.subscribers.read().unwrap();
            for (subscriber_id, info) in subscribers.iter() {
                if info.sender.send(change.clone()).is_err() {
                    // Channel is closed, mark for removal
                    failed_subscribers.push(subscriber_id.clone());
                }
            }
        }

        if failed_subscribers.is_empty() {
            return Ok(());
        }

        {
            let mut subscribers = self.subscribers.write().unwrap();
            for subscriber_id in &failed_subscribers {
                subscribers.remove(subscriber_id);
            }
        }

        Err(StoreError::NotifyFailed { failed_subscribers })
    }
}
