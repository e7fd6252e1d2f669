//! Producer interface for reporting failures
//!
//! The single surface the rest of an application reports problems through.
//! All reporting is fire-and-forget: events land in the store and the
//! presentation layer takes it from there. [`handle_api_error`] normalizes
//! arbitrary caught failure values into displayable events through a fixed
//! priority chain.
//!
//! [`handle_api_error`]: ErrorReporter::handle_api_error

mod normalize;
mod reporter;

pub use normalize::{normalize, ApiError, CaughtFailure, Normalized, DEFAULT_FALLBACK_MESSAGE};
pub use reporter::ErrorReporter;
