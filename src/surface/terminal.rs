//! Composed terminal sink writing all surfaces to stderr

use crate::present::{VerticalEdge, ViewSink, ViewState};
use crate::surface::detail::render_detail;
use crate::surface::indicator::render_indicator;
use crate::surface::panel::render_panel;
use crate::surface::toast::render_toast;
use async_trait::async_trait;
use std::io::Write;

const DEFAULT_WIDTH: usize = 80;

/// Production [`ViewSink`]: composes indicator, panel, detail and toast
/// into one frame per state change and writes it to stderr.
pub struct TerminalSurfaces {
    width: usize,
    use_colors: bool,
}

impl Default for TerminalSurfaces {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, true)
    }
}

impl TerminalSurfaces {
    pub fn new(width: usize, use_colors: bool) -> Self {
        Self { width, use_colors }
    }

    /// Build the complete frame for a view state. Pure; the async sink just
    /// writes this out.
    pub fn compose(&self, view: &ViewState) -> String {
        let mut frame = String::new();

        let toast = view
            .toast
            .as_ref()
            .map(|event| render_toast(event, view.position, self.width, self.use_colors));

        if view.position.vertical == VerticalEdge::Top {
            if let Some(toast) = &toast {
                frame.push_str(toast);
                frame.push('\n');
            }
        }

        if let Some(indicator) = render_indicator(view.badge_count, self.use_colors) {
            frame.push_str(&indicator);
            frame.push('\n');
        }

        if let Some(panel) = render_panel(view, self.use_colors) {
            frame.push_str(&panel);
        }

        if let Some(detail) = &view.detail {
            frame.push_str(&render_detail(detail, self.use_colors));
        }

        if view.position.vertical == VerticalEdge::Bottom {
            if let Some(toast) = &toast {
                frame.push_str(toast);
                frame.push('\n');
            }
        }

        frame
    }
}

#[async_trait]
impl ViewSink for TerminalSurfaces {
    async fn render(&mut self, view: &ViewState) {
        let frame = self.compose(view);
        if frame.is_empty() {
            return;
        }
        eprint!("{}", frame);
        let _ = std::io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::present::{HorizontalEdge, Position};
    use crate::store::{ErrorDraft, ErrorEvent, EventId, Severity};
    use std::sync::Arc;
    use std::time::SystemTime;

    fn event(id: u64, message: &str) -> Arc<ErrorEvent> {
        Arc::new(ErrorEvent::from_draft(
            EventId(id),
            ErrorDraft::new(message, Severity::Error),
            SystemTime::UNIX_EPOCH,
        ))
    }

    fn base_view() -> ViewState {
        ViewState {
            entries: Vec::new(),
            badge_count: 0,
            panel_open: false,
            detail: None,
            toast: None,
            position: Position::default(),
        }
    }

    #[test]
    fn test_empty_view_composes_empty_frame() {
        let surfaces = TerminalSurfaces::new(80, false);
        assert!(surfaces.compose(&base_view()).is_empty());
    }

    #[test]
    fn test_bottom_position_puts_toast_last() {
        let surfaces = TerminalSurfaces::new(80, false);
        let mut view = base_view();
        view.entries = vec![event(1, "boom")];
        view.badge_count = 1;
        view.toast = Some(event(1, "boom"));

        let frame = surfaces.compose(&view);
        let indicator_pos = frame.find("[● 1]").unwrap();
        let toast_pos = frame.find("✖ boom [x]").unwrap();
        assert!(indicator_pos < toast_pos);
    }

    #[test]
    fn test_top_position_puts_toast_first() {
        let surfaces = TerminalSurfaces::new(80, false);
        let mut view = base_view();
        view.entries = vec![event(1, "boom")];
        view.badge_count = 1;
        view.toast = Some(event(1, "boom"));
        view.position = Position {
            vertical: VerticalEdge::Top,
            horizontal: HorizontalEdge::Left,
        };

        let frame = surfaces.compose(&view);
        let toast_pos = frame.find("✖ boom [x]").unwrap();
        let indicator_pos = frame.find("[● 1]").unwrap();
        assert!(toast_pos < indicator_pos);
    }

    #[test]
    fn test_open_panel_and_detail_are_included() {
        let surfaces = TerminalSurfaces::new(80, false);
        let mut view = base_view();
        view.entries = vec![event(1, "listed failure")];
        view.badge_count = 1;
        view.panel_open = true;
        view.detail = Some(event(1, "listed failure"));

        let frame = surfaces.compose(&view);
        assert!(frame.contains("Errors (1)"));
        assert!(frame.contains("listed failure"));
        assert!(frame.contains("[ OK ]"));
    }

    #[test]
    fn test_same_view_composes_identical_frames() {
        let surfaces = TerminalSurfaces::new(80, false);
        let mut view = base_view();
        view.entries = vec![event(1, "boom")];
        view.badge_count = 1;

        assert_eq!(surfaces.compose(&view), surfaces.compose(&view));
    }
}
