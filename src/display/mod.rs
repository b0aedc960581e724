//! Label rendering for the status surfaces
//!
//! Pure functions from second counts to the strings shown in the status bar,
//! the menu header, and JSON output.

mod format;
mod json;
mod labels;

pub(crate) use format::Remaining;
pub(crate) use json::snapshot_json;
pub(crate) use labels::{PLACEHOLDER_HEADER, PLACEHOLDER_LABEL, status_label, summary_header};
