//! errtray - an in-process error notification center for terminal applications.
//!
//! A host application reports failures through a [`report::ErrorReporter`];
//! events land in an ordered in-memory [`store::ErrorStore`], the
//! [`present::PresentationController`] derives toast/panel/badge/detail view
//! state from every change, and the [`surface`] renderers turn that state
//! into terminal output. [`center::ErrorCenter`] wires the pieces together
//! for a running application.

pub mod center;
pub mod core;
pub mod present;
pub mod report;
pub mod store;
pub mod surface;
