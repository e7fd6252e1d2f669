//! Async pump driving the presentation controller
//!
//! A single task owns the controller and reacts to store change
//! notifications, user intents, the auto-hide deadline and the shutdown
//! signal. The deadline is re-read on every iteration, so replacing the
//! toast structurally drops the stale sleep; `handle_timeout`'s elapsed
//! check is the second line of defense.

use crate::present::controller::{Intent, PresentationController, ViewState};
use crate::store::StoreChange;
use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{sleep_until, Instant};

/// Render target for derived view state.
///
/// Implementations are pure consumers: same view in, same output out. The
/// terminal sink in [`surface`](crate::surface) is the production
/// implementation; tests record the frames they receive.
#[async_trait]
pub trait ViewSink: Send {
    async fn render(&mut self, view: &ViewState);
}

/// Run the presentation loop until shutdown is signalled or both input
/// channels close. Renders after every state change, starting with an
/// initial frame for state accumulated before the loop started.
pub async fn run<S: ViewSink>(
    mut controller: PresentationController,
    mut changes: UnboundedReceiver<StoreChange>,
    mut intents: UnboundedReceiver<Intent>,
    mut shutdown_rx: broadcast::Receiver<()>,
    mut sink: S,
) {
    sink.render(&controller.view()).await;

    loop {
        let deadline = controller.toast_deadline();
        // select! still evaluates the disabled branch's expression, so a
        // disarmed deadline needs a placeholder instant
        let sleep_target =
            deadline.unwrap_or_else(|| Instant::now() + Duration::from_secs(86400));

        tokio::select! {
            _ = shutdown_rx.recv() => {
                log::debug!("Presentation loop received shutdown signal");
                return;
            }

            change = changes.recv() => {
                match change {
                    Some(change) => {
                        log::trace!("Presentation loop observed {:?}", change);
                        controller.sync();
                    }
                    None => {
                        log::debug!("Store subscription closed, stopping presentation loop");
                        return;
                    }
                }
            }

            intent = intents.recv() => {
                match intent {
                    Some(intent) => controller.apply(intent),
                    None => {
                        log::debug!("Intent channel closed, stopping presentation loop");
                        return;
                    }
                }
            }

            _ = sleep_until(sleep_target), if deadline.is_some() => {
                controller.handle_timeout(Instant::now());
            }
        }

        sink.render(&controller.view()).await;
    }
}
