//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

use super::summary::SubnetSummary;
use colored::Colorize;
use std::fmt::Write;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Render a summary as aligned `"label", "value"` lines followed by the
/// sibling list.
pub fn render_summary(summary: &SubnetSummary) -> String {
    let mut out = String::new();
    let rows: [(&str, String); 8] = [
        ("subnet", summary.subnet.to_string()),
        ("mask", summary.mask.to_string()),
        ("cidr", format!("/{}", summary.cidr)),
        ("network", summary.network.to_string()),
        ("host_id", summary.host_identifier.to_string()),
        ("broadcast", summary.broadcast.to_string()),
        ("options", summary.options.to_string()),
        ("siblings", summary.sibling_count.to_string()),
    ];
    for (label, value) in rows {
        let _ = writeln!(out, "{},{}", format_field(label, 12), format_field(value, 20));
    }

    for addr in &summary.siblings {
        let marker = if *addr == summary.subnet.addr {
            "self".on_blue().to_string()
        } else if *addr == summary.network {
            "network".green().to_string()
        } else if *addr == summary.broadcast {
            "broadcast".yellow().to_string()
        } else {
            String::new()
        };
        let _ = writeln!(out, "{} {}", format_field(addr, 18), marker);
    }

    if summary.truncated {
        let _ = writeln!(
            out,
            "#{}# listed {} of {} siblings",
            "NOTE".on_red(),
            summary.siblings.len(),
            summary.sibling_count
        );
    }
    out
}
