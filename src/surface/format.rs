//! Shared formatting utilities for the display surfaces

use crate::core::styles::StyleRole;
use crate::store::Severity;
use chrono::{DateTime, Local};
use std::time::SystemTime;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Style role carrying a severity's color
pub fn severity_role(severity: Severity) -> StyleRole {
    match severity {
        Severity::Error => StyleRole::Error,
        Severity::Warning => StyleRole::Warning,
        Severity::Info => StyleRole::Info,
    }
}

/// Single-character icon for a severity
pub fn severity_icon(severity: Severity) -> char {
    match severity {
        Severity::Error => '✖',
        Severity::Warning => '⚠',
        Severity::Info => 'ℹ',
    }
}

/// Short wall-clock time for list rows
pub fn clock_time(timestamp: SystemTime) -> String {
    DateTime::<Local>::from(timestamp)
        .format("%H:%M:%S")
        .to_string()
}

/// Full timestamp for the detail view
pub fn full_timestamp(timestamp: SystemTime) -> String {
    DateTime::<Local>::from(timestamp)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Truncate to a display width, appending an ellipsis when text was cut.
/// Width-aware so wide (CJK, emoji) characters do not overflow columns.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > max_width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out.push('…');
    out
}

/// Pad text on the left so its right edge lands at `width` columns
pub fn align_right(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    format!("{}{}", " ".repeat(width - text_width), text)
}
