//! PresentationController implementation

use crate::present::options::{DisplayOptions, Position};
use crate::store::{ErrorEvent, ErrorStore, EventId};
use std::sync::Arc;
use tokio::time::Instant;

/// Toast lifecycle state.
///
/// `Visible` carries the flashed event and, when an auto-hide timeout is
/// configured, the deadline at which the toast hides itself. Replacing the
/// shown event always goes through a fresh `Visible` with a fresh deadline;
/// there is no in-place update.
#[derive(Clone, Debug)]
pub enum ToastState {
    Hidden,
    Visible {
        event: Arc<ErrorEvent>,
        deadline: Option<Instant>,
    },
}

/// User intents emitted by display surfaces
#[derive(Clone, Debug)]
pub enum Intent {
    TogglePanel,
    ClosePanel,
    DismissOne(EventId),
    ClearAll,
    OpenDetails(Arc<ErrorEvent>),
    CloseDetails,
    CloseToast,
}

/// Everything the display surfaces need to render one frame
#[derive(Clone, Debug)]
pub struct ViewState {
    /// Capped list for the panel, newest first
    pub entries: Vec<Arc<ErrorEvent>>,
    /// Badge count: length of the capped list, not of the full store
    pub badge_count: usize,
    pub panel_open: bool,
    /// Detail dialog content, captured by value at open time
    pub detail: Option<Arc<ErrorEvent>>,
    /// Currently-flashed toast event, if visible
    pub toast: Option<Arc<ErrorEvent>>,
    pub position: Position,
}

/// Derives view state from the store and owns the ephemeral UI state.
///
/// All methods are synchronous; the async pump in
/// [`runtime`](crate::present::runtime) calls [`sync`](Self::sync) on every
/// store change, [`apply`](Self::apply) for user intents and
/// [`handle_timeout`](Self::handle_timeout) when the auto-hide deadline
/// elapses.
pub struct PresentationController {
    store: Arc<ErrorStore>,
    options: DisplayOptions,
    /// Capped snapshot, refreshed on every sync
    visible: Vec<Arc<ErrorEvent>>,
    panel_open: bool,
    detail: Option<Arc<ErrorEvent>>,
    toast: ToastState,
    /// Id of the most recently flashed toast. Compared against the current
    /// head by id; never by object identity or list length, so removing a
    /// non-head event cannot re-trigger a toast already shown.
    last_flashed: Option<EventId>,
}

impl PresentationController {
    pub fn new(store: Arc<ErrorStore>, options: DisplayOptions) -> Self {
        let mut controller = Self {
            store,
            options,
            visible: Vec::new(),
            panel_open: false,
            detail: None,
            toast: ToastState::Hidden,
            last_flashed: None,
        };
        // Pick up any events reported before the controller was mounted
        controller.sync();
        controller
    }

    pub fn options(&self) -> &DisplayOptions {
        &self.options
    }

    /// Re-derive view state from the current store snapshot.
    ///
    /// Truncates to `max_errors`, then applies the toast trigger rule: a
    /// head whose id differs from the last flashed id flashes (arming the
    /// auto-hide deadline); an empty store hides the toast.
    pub fn sync(&mut self) {
        self.visible = self
            .store
            .events()
            .into_iter()
            .take(self.options.max_errors)
            .collect();

        match self.visible.first() {
            None => {
                self.toast = ToastState::Hidden;
            }
            Some(head) => {
                if self.last_flashed != Some(head.id) {
                    let deadline = self.options.auto_hide.map(|timeout| Instant::now() + timeout);
                    log::trace!("Flashing toast for {}", head.id);
                    self.toast = ToastState::Visible {
                        event: head.clone(),
                        deadline,
                    };
                    self.last_flashed = Some(head.id);
                }
            }
        }
    }

    /// Dispatch a user intent
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::TogglePanel => self.toggle_panel(),
            Intent::ClosePanel => self.close_panel(),
            Intent::DismissOne(id) => self.dismiss_one(id),
            Intent::ClearAll => self.clear_all(),
            Intent::OpenDetails(event) => self.open_details(event),
            Intent::CloseDetails => self.close_details(),
            Intent::CloseToast => self.close_toast(),
        }
    }

    pub fn toggle_panel(&mut self) {
        self.panel_open = !self.panel_open;
    }

    pub fn close_panel(&mut self) {
        self.panel_open = false;
    }

    /// Dismiss a single event and resync immediately
    pub fn dismiss_one(&mut self, id: EventId) {
        self.store.remove(id);
        self.sync();
    }

    /// Dismiss everything. Also force-closes the panel: clearing the list
    /// while it is open would otherwise leave an empty panel on screen.
    pub fn clear_all(&mut self) {
        self.store.clear();
        self.panel_open = false;
        self.sync();
    }

    /// Open the detail dialog for an event. The event is captured by value:
    /// if the store is cleared while the dialog is open it keeps showing the
    /// last-known data rather than crashing or force-closing.
    pub fn open_details(&mut self, event: Arc<ErrorEvent>) {
        self.detail = Some(event);
    }

    pub fn close_details(&mut self) {
        self.detail = None;
    }

    /// Hide the toast immediately. Dropping the deadline cancels any pending
    /// auto-hide; the flashed id is retained so an unchanged head does not
    /// re-flash.
    pub fn close_toast(&mut self) {
        self.toast = ToastState::Hidden;
    }

    /// The pending auto-hide deadline, if a toast is visible and armed
    pub fn toast_deadline(&self) -> Option<Instant> {
        match &self.toast {
            ToastState::Visible {
                deadline: Some(deadline),
                ..
            } => Some(*deadline),
            _ => None,
        }
    }

    /// Hide the toast if its deadline has elapsed. No-op against any other
    /// state, so a timer firing against stale state cannot hide a newer
    /// toast.
    pub fn handle_timeout(&mut self, now: Instant) {
        if let ToastState::Visible {
            event,
            deadline: Some(deadline),
        } = &self.toast
        {
            if now >= *deadline {
                log::trace!("Auto-hiding toast for {}", event.id);
                self.toast = ToastState::Hidden;
            }
        }
    }

    /// Snapshot of everything the surfaces render
    pub fn view(&self) -> ViewState {
        ViewState {
            entries: self.visible.clone(),
            badge_count: self.visible.len(),
            panel_open: self.panel_open,
            detail: self.detail.clone(),
            toast: match &self.toast {
                ToastState::Visible { event, .. } => Some(event.clone()),
                ToastState::Hidden => None,
            },
            position: self.options.position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{ErrorDraft, Severity};
    use std::time::Duration;
    use tokio::time::advance;

    fn setup(options: DisplayOptions) -> (Arc<ErrorStore>, PresentationController) {
        let store = Arc::new(ErrorStore::new());
        let controller = PresentationController::new(store.clone(), options);
        (store, controller)
    }

    fn report(store: &ErrorStore, message: &str, severity: Severity) -> Arc<ErrorEvent> {
        store.add(ErrorDraft::new(message, severity))
    }

    #[tokio::test(start_paused = true)]
    async fn test_panel_list_is_capped_to_most_recent() {
        let (store, mut controller) = setup(DisplayOptions::new().max_errors(3));

        for i in 0..7 {
            report(&store, &format!("event {}", i), Severity::Error);
        }
        controller.sync();

        let view = controller.view();
        assert_eq!(view.entries.len(), 3);
        assert_eq!(view.badge_count, 3);
        let messages: Vec<&str> = view.entries.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["event 6", "event 5", "event 4"]);

        // Full history stays in the store
        assert_eq!(store.len(), 7);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_head_flashes_toast() {
        let (store, mut controller) = setup(DisplayOptions::default());
        assert!(controller.view().toast.is_none());

        let event = report(&store, "boom", Severity::Error);
        controller.sync();

        let view = controller.view();
        assert_eq!(view.toast.unwrap().id, event.id);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unchanged_head_does_not_reflash() {
        let (store, mut controller) = setup(DisplayOptions::new().auto_hide_ms(1000));

        report(&store, "only", Severity::Error);
        controller.sync();
        let armed = controller.toast_deadline().expect("deadline armed");

        // Time moves on; a resync with the same head must not re-arm
        advance(Duration::from_millis(400)).await;
        controller.sync();
        assert_eq!(controller.toast_deadline(), Some(armed));
    }

    #[tokio::test(start_paused = true)]
    async fn test_removing_non_head_event_does_not_retrigger() {
        let (store, mut controller) = setup(DisplayOptions::new().auto_hide_ms(1000));

        let older = report(&store, "older", Severity::Warning);
        controller.sync();
        let newer = report(&store, "newer", Severity::Error);
        controller.sync();
        let armed = controller.toast_deadline().unwrap();

        advance(Duration::from_millis(300)).await;
        store.remove(older.id);
        controller.sync();

        // Head is still the newer event: same toast, same deadline
        assert_eq!(controller.view().toast.unwrap().id, newer.id);
        assert_eq!(controller.toast_deadline(), Some(armed));
    }

    #[tokio::test(start_paused = true)]
    async fn test_removing_head_falls_back_to_previous_event() {
        let (store, mut controller) = setup(DisplayOptions::default());

        let first = report(&store, "first", Severity::Error);
        controller.sync();
        let second = report(&store, "second", Severity::Error);
        controller.sync();
        assert_eq!(controller.view().toast.as_ref().unwrap().id, second.id);

        store.remove(second.id);
        controller.sync();

        // The head changed by id, so the older event flashes again; it is a
        // distinct head change, not a duplicate fire for an unchanged head
        assert_eq!(controller.view().toast.unwrap().id, first.id);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_store_hides_toast() {
        let (store, mut controller) = setup(DisplayOptions::default());

        let event = report(&store, "gone", Severity::Error);
        controller.sync();
        assert!(controller.view().toast.is_some());

        store.remove(event.id);
        controller.sync();
        assert!(controller.view().toast.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_hide_deadline_elapses_once() {
        let (store, mut controller) = setup(DisplayOptions::new().auto_hide_ms(1000));

        report(&store, "transient", Severity::Info);
        controller.sync();
        let deadline = controller.toast_deadline().unwrap();

        // Before the deadline nothing changes
        advance(Duration::from_millis(999)).await;
        controller.handle_timeout(Instant::now());
        assert!(controller.view().toast.is_some());

        advance(Duration::from_millis(1)).await;
        controller.handle_timeout(Instant::now());
        assert!(controller.view().toast.is_none());
        assert!(controller.toast_deadline().is_none());

        // A second firing against the already-hidden toast is a no-op
        controller.handle_timeout(deadline + Duration::from_secs(1));
        assert!(controller.view().toast.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_replacement_resets_the_timer() {
        let (store, mut controller) = setup(DisplayOptions::new().auto_hide_ms(1000));

        report(&store, "first", Severity::Error);
        controller.sync();
        let first_deadline = controller.toast_deadline().unwrap();

        advance(Duration::from_millis(400)).await;
        let second = report(&store, "second", Severity::Error);
        controller.sync();
        let second_deadline = controller.toast_deadline().unwrap();

        // Timer restarts from the replacement's arrival, it does not
        // accumulate or keep the first deadline
        assert_eq!(second_deadline, first_deadline + Duration::from_millis(400));

        // The first event's deadline firing must not hide the newer toast
        advance(Duration::from_millis(600)).await;
        controller.handle_timeout(first_deadline);
        assert_eq!(controller.view().toast.as_ref().unwrap().id, second.id);

        advance(Duration::from_millis(400)).await;
        controller.handle_timeout(Instant::now());
        assert!(controller.view().toast.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_deadline_without_auto_hide() {
        let (store, mut controller) = setup(DisplayOptions::new().auto_hide_ms(0));

        report(&store, "sticky", Severity::Error);
        controller.sync();

        assert!(controller.view().toast.is_some());
        assert!(controller.toast_deadline().is_none());

        // Without a deadline the toast persists until manually closed
        advance(Duration::from_secs(3600)).await;
        controller.handle_timeout(Instant::now());
        assert!(controller.view().toast.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_toast_cancels_pending_deadline() {
        let (store, mut controller) = setup(DisplayOptions::new().auto_hide_ms(1000));

        report(&store, "boom", Severity::Error);
        controller.sync();
        assert!(controller.toast_deadline().is_some());

        controller.apply(Intent::CloseToast);
        assert!(controller.view().toast.is_none());
        assert!(controller.toast_deadline().is_none());

        // An unchanged head does not bring the toast back
        controller.sync();
        assert!(controller.view().toast.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_all_force_closes_panel() {
        let (store, mut controller) = setup(DisplayOptions::default());

        report(&store, "a", Severity::Error);
        controller.sync();
        controller.apply(Intent::TogglePanel);
        assert!(controller.view().panel_open);

        controller.apply(Intent::ClearAll);

        let view = controller.view();
        assert!(!view.panel_open);
        assert_eq!(view.badge_count, 0);
        assert!(view.toast.is_none());
        assert!(store.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_detail_keeps_stale_event_after_clear() {
        let (store, mut controller) = setup(DisplayOptions::default());

        let event = report(&store, "captured", Severity::Error);
        controller.sync();
        controller.apply(Intent::OpenDetails(event.clone()));

        store.clear();
        controller.sync();

        // The dialog was opened with a by-value capture; it keeps showing
        // the last-known data instead of crashing or force-closing
        let view = controller.view();
        let detail = view.detail.expect("detail stays open");
        assert_eq!(detail.id, event.id);
        assert_eq!(detail.message, "captured");

        controller.apply(Intent::CloseDetails);
        assert!(controller.view().detail.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_one_resyncs() {
        let (store, mut controller) = setup(DisplayOptions::default());

        let a = report(&store, "a", Severity::Error);
        report(&store, "b", Severity::Error);
        controller.sync();
        assert_eq!(controller.view().badge_count, 2);

        controller.apply(Intent::DismissOne(a.id));
        assert_eq!(controller.view().badge_count, 1);

        // Dismissing an already-dismissed id is harmless
        controller.apply(Intent::DismissOne(a.id));
        assert_eq!(controller.view().badge_count, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_controller_picks_up_preexisting_events() {
        let store = Arc::new(ErrorStore::new());
        let early = store.add(ErrorDraft::new("before mount", Severity::Error));

        let controller = PresentationController::new(store, DisplayOptions::default());

        let view = controller.view();
        assert_eq!(view.badge_count, 1);
        assert_eq!(view.toast.unwrap().id, early.id);
    }
}
