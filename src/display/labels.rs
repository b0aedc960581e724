use super::format::{Remaining, format_hm};

/// Status label before the first refresh
pub(crate) const PLACEHOLDER_LABEL: &str = "🏠 --:--";

/// Menu header before the first refresh
pub(crate) const PLACEHOLDER_HEADER: &str = "Home Time Remaining";

const LOCKED_LABEL: &str = "🔒 LOCKED";

/// Status-bar label: "🏠 2h 30m" or "🔒 LOCKED"
pub(crate) fn status_label(remaining: i64) -> String {
    match Remaining::from_secs(remaining) {
        Remaining::Locked => LOCKED_LABEL.to_string(),
        left @ Remaining::Left(_) => format!("🏠 {left}"),
    }
}

/// Menu header: "Used: 1h 30m | Remaining: 2h 30m".
/// Remaining is clamped at zero for display only.
pub(crate) fn summary_header(used: i64, remaining: i64) -> String {
    format!(
        "Used: {} | Remaining: {}",
        format_hm(used),
        format_hm(remaining.max(0))
    )
}
