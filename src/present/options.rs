//! Display configuration for the presentation layer

use std::time::Duration;

/// Default cap on how many events the panel and badge surface
pub const DEFAULT_MAX_ERRORS: usize = 5;

#[derive(Copy, Clone, Debug, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum VerticalEdge {
    Top,
    Bottom,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum HorizontalEdge {
    Left,
    Right,
}

/// Where the toast banner is anchored
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub vertical: VerticalEdge,
    pub horizontal: HorizontalEdge,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            vertical: VerticalEdge::Bottom,
            horizontal: HorizontalEdge::Right,
        }
    }
}

/// Configuration consumed by the mounting point.
///
/// `auto_hide` of `None` means the toast persists until manually
/// dismissed; `max_errors` caps the panel list and badge count, not the
/// store itself.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayOptions {
    pub position: Position,
    pub auto_hide: Option<Duration>,
    pub max_errors: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            position: Position::default(),
            auto_hide: None,
            max_errors: DEFAULT_MAX_ERRORS,
        }
    }
}

impl DisplayOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the auto-hide timeout in milliseconds; 0 means never auto-hide
    pub fn auto_hide_ms(mut self, millis: u64) -> Self {
        self.auto_hide = if millis == 0 {
            None
        } else {
            Some(Duration::from_millis(millis))
        };
        self
    }

    pub fn max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }

    pub fn position(mut self, vertical: VerticalEdge, horizontal: HorizontalEdge) -> Self {
        self.position = Position {
            vertical,
            horizontal,
        };
        self
    }
}
