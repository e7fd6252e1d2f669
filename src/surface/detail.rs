//! Detail view for a single event

use crate::core::styles::StyleRole;
use crate::store::ErrorEvent;
use crate::surface::format::{full_timestamp, severity_icon, severity_role};

/// Render the modal detail view: severity header, full message, the
/// optional details block preformatted as-is, the full timestamp and a
/// single acknowledge affordance.
pub fn render_detail(event: &ErrorEvent, use_colors: bool) -> String {
    let role = severity_role(event.severity);
    let header = format!("{} {}", severity_icon(event.severity), event.severity);

    let mut out = String::new();
    out.push_str(&role.paint(&header, use_colors));
    out.push('\n');
    out.push_str(&event.message);
    out.push('\n');

    if let Some(details) = &event.details {
        out.push('\n');
        for line in details.lines() {
            out.push_str(&StyleRole::Dim.paint(&format!("    {}", line), use_colors));
            out.push('\n');
        }
    }

    out.push('\n');
    out.push_str(&StyleRole::Dim.paint(&full_timestamp(event.timestamp), use_colors));
    out.push('\n');
    out.push_str(&StyleRole::Accent.paint("[ OK ]", use_colors));
    out.push('\n');
    out
}
