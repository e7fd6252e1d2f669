//! Presentation layer: derived view state and the async pump
//!
//! Converts raw store state into everything the display surfaces need, and
//! owns the UI-only ephemeral state that must not live in the store: panel
//! open/closed, the detail dialog's captured event, toast visibility and its
//! auto-hide deadline.
//!
//! The [`PresentationController`] is synchronous and deterministic; the
//! [`runtime`] module drives it from a `tokio::select!` loop over store
//! change notifications, user intents, the auto-hide deadline and a
//! shutdown signal.

mod controller;
mod options;
pub mod runtime;

pub use controller::{Intent, PresentationController, ToastState, ViewState};
pub use options::{DisplayOptions, HorizontalEdge, Position, VerticalEdge, DEFAULT_MAX_ERRORS};
pub use runtime::ViewSink;
