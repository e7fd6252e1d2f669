//! Transient toast banner

use crate::present::{HorizontalEdge, Position};
use crate::store::ErrorEvent;
use crate::surface::format::{align_right, severity_icon, severity_role, truncate_to_width};

/// Render the single-event banner: severity icon and color, the message,
/// and an independent close affordance. `width` is the terminal width used
/// for horizontal alignment; a right-anchored position pads the banner to
/// the right edge.
pub fn render_toast(
    event: &ErrorEvent,
    position: Position,
    width: usize,
    use_colors: bool,
) -> String {
    let body = format!(
        "{} {} [x]",
        severity_icon(event.severity),
        truncate_to_width(&event.message, width.saturating_sub(6)),
    );
    let painted = severity_role(event.severity).paint(&body, use_colors);

    match position.horizontal {
        HorizontalEdge::Left => painted,
        // Pad using the unpainted width so ANSI escapes do not skew alignment
        HorizontalEdge::Right if use_colors => {
            let pad = align_right(&body, width);
            let pad_len = pad.len() - body.len();
            format!("{}{}", " ".repeat(pad_len), painted)
        }
        HorizontalEdge::Right => align_right(&body, width),
    }
}
