//! Common test utilities and helpers
//!
//! Shared sink and scheduling helpers for the integration tests.

use async_trait::async_trait;
use errtray::present::{ViewSink, ViewState};
use std::sync::{Arc, Mutex};
use tokio::task::yield_now;

/// Records every rendered frame for later inspection
#[derive(Clone)]
pub struct RecordingSink {
    frames: Arc<Mutex<Vec<ViewState>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            frames: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn last(&self) -> Option<ViewState> {
        self.frames.lock().unwrap().last().cloned()
    }

    pub fn frame_count(&self) -> usize {
        self.frames.lock().unwrap().len()
    }
}

#[async_trait]
impl ViewSink for RecordingSink {
    async fn render(&mut self, view: &ViewState) {
        self.frames.lock().unwrap().push(view.clone());
    }
}

/// Let the presentation loop drain its channels without advancing time
pub async fn settle() {
    for _ in 0..20 {
        yield_now().await;
    }
}
