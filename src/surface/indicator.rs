//! Floating indicator badge

use crate::core::styles::StyleRole;

/// Render the badge showing how many events the panel would surface.
/// Returns `None` at zero so nothing is drawn at all when there is nothing
/// to report.
pub fn render_indicator(badge_count: usize, use_colors: bool) -> Option<String> {
    if badge_count == 0 {
        return None;
    }

    let badge = format!("● {}", badge_count);
    Some(format!(
        "[{}]",
        StyleRole::Error.paint(&badge, use_colors)
    ))
}
