//! Expandable list panel

use crate::core::styles::StyleRole;
use crate::present::ViewState;
use crate::surface::format::{clock_time, severity_icon, severity_role, truncate_to_width};
use prettytable::{format, Cell, Row, Table};

const MESSAGE_COLUMN_WIDTH: usize = 48;

/// Render the expandable panel: a header, one row per visible event
/// (newest first), and a clear-all affordance only when the list is
/// non-empty. Returns `None` while the panel is closed.
pub fn render_panel(view: &ViewState, use_colors: bool) -> Option<String> {
    if !view.panel_open {
        return None;
    }

    let header = if view.entries.is_empty() {
        "No Errors".to_string()
    } else {
        format!("Errors ({})", view.entries.len())
    };
    let mut out = StyleRole::Header.paint(&header, use_colors);
    out.push('\n');

    if view.entries.is_empty() {
        return Some(out);
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);

    for event in &view.entries {
        let marker = format!("{} {}", severity_icon(event.severity), event.severity);
        let mut marker_cell = Cell::new(&marker);
        if use_colors {
            if let Some(spec) = severity_role(event.severity).to_prettytable_spec() {
                marker_cell = marker_cell.style_spec(&spec);
            }
        }

        table.add_row(Row::new(vec![
            marker_cell,
            Cell::new(&clock_time(event.timestamp)),
            Cell::new(&truncate_to_width(&event.message, MESSAGE_COLUMN_WIDTH)),
            // Dismiss affordance: hosts map this id back to a DismissOne
            // intent for the row
            Cell::new(&format!("[x {}]", event.id)),
        ]));
    }

    out.push_str(&table.to_string());
    out.push_str(&StyleRole::Dim.paint("[clear all]", use_colors));
    out.push('\n');
    Some(out)
}
