//! Shared infrastructure: logging setup, style roles, time abstraction,
//! build metadata.

pub mod logging;
pub mod styles;
pub mod time;
pub mod version;
