//! Output formatting for subnet summaries.
//!
//! This module handles formatting and outputting query results:
//! - [`SubnetSummary`] - Collected query results, serializable to JSON
//! - [`terminal`] - Terminal output with colors

mod summary;
pub mod terminal;

pub use summary::SubnetSummary;
pub use terminal::{format_field, render_summary};
