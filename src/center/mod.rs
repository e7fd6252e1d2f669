//! Mounting point wiring store, reporter, controller and sink together
//!
//! [`ErrorCenter::mount`] constructs a fresh store, subscribes a
//! presentation controller to it, spawns the presentation loop and hands
//! back the producer surface. There is deliberately no process-wide
//! instance: each mount owns its own store, so tests and embedded uses get
//! full isolation while a running application keeps single-instance
//! semantics by mounting once at its root.

use crate::present::runtime::{run, ViewSink};
use crate::present::{DisplayOptions, Intent, PresentationController};
use crate::report::ErrorReporter;
use crate::store::{ErrorStore, StoreResult};
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// A mounted error-notification center.
///
/// Producers report through clones of [`reporter`](Self::reporter); display
/// surfaces feed user interactions back through
/// [`send_intent`](Self::send_intent). Unmounting (or dropping) shuts the
/// presentation loop down and releases its store subscription and any
/// pending auto-hide timer.
pub struct ErrorCenter {
    reporter: ErrorReporter,
    intent_tx: mpsc::UnboundedSender<Intent>,
    shutdown_tx: broadcast::Sender<()>,
    task: Option<JoinHandle<()>>,
}

impl ErrorCenter {
    /// Mount with a fresh store. Must be called within a tokio runtime.
    pub fn mount<S: ViewSink + 'static>(options: DisplayOptions, sink: S) -> StoreResult<Self> {
        Self::mount_with_store(Arc::new(ErrorStore::new()), options, sink)
    }

    /// Mount against an existing store, for hosts that create the store
    /// ahead of time or share it with other consumers
    pub fn mount_with_store<S: ViewSink + 'static>(
        store: Arc<ErrorStore>,
        options: DisplayOptions,
        sink: S,
    ) -> StoreResult<Self> {
        let changes = store.subscribe("presentation".to_string(), "center:mount".to_string())?;
        let (intent_tx, intent_rx) = mpsc::unbounded_channel();
        let (shutdown_tx, shutdown_rx) = broadcast::channel(1);

        let controller = PresentationController::new(store.clone(), options);
        let task = tokio::spawn(run(controller, changes, intent_rx, shutdown_rx, sink));
        log::debug!("Error center mounted");

        Ok(Self {
            reporter: ErrorReporter::new(store),
            intent_tx,
            shutdown_tx,
            task: Some(task),
        })
    }

    /// Producer surface for reporting failures; cheap to clone and hand out
    pub fn reporter(&self) -> ErrorReporter {
        self.reporter.clone()
    }

    /// Forward a user intent from a display surface to the controller
    pub fn send_intent(&self, intent: Intent) {
        if self.intent_tx.send(intent).is_err() {
            log::warn!("Intent dropped: presentation loop is not running");
        }
    }

    /// Shut the presentation loop down and wait for it to finish
    pub async fn unmount(mut self) {
        let _ = self.shutdown_tx.send(());
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                log::warn!("Presentation loop ended abnormally: {:?}", e);
            }
        }
        log::debug!("Error center unmounted");
    }
}

impl Drop for ErrorCenter {
    fn drop(&mut self) {
        // Second line of defense when unmount was not awaited: signal the
        // loop and cancel the task so the store subscription and any
        // pending auto-hide timer cannot outlive the center
        let _ = self.shutdown_tx.send(());
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
