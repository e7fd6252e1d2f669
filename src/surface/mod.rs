//! Display surfaces: pure renderers over derived view state
//!
//! Four surfaces, each a pure function from view state to terminal text
//! with no store access of their own:
//!
//! - **indicator**: floating badge with the visible-event count
//! - **panel**: the expandable list of current events
//! - **detail**: full view of a single event
//! - **toast**: transient single-event banner
//!
//! [`TerminalSurfaces`] composes all four into a [`ViewSink`] writing to
//! stderr.
//!
//! [`ViewSink`]: crate::present::ViewSink

pub mod detail;
pub mod format;
pub mod indicator;
pub mod panel;
mod terminal;
pub mod toast;

pub use terminal::TerminalSurfaces;
