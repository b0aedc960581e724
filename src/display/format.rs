use std::fmt;

use crate::consts::{SECS_PER_HOUR, SECS_PER_MINUTE};

/// Split seconds into whole hours and leftover minutes, truncating toward zero
pub(crate) fn split_hm(secs: i64) -> (i64, i64) {
    (
        secs / SECS_PER_HOUR,
        (secs % SECS_PER_HOUR) / SECS_PER_MINUTE,
    )
}

/// "4h 00m"
pub(crate) fn format_hm(secs: i64) -> String {
    let (hours, minutes) = split_hm(secs);
    format!("{hours}h {minutes:02}m")
}

/// Remaining budget as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Remaining {
    Locked,
    Left(i64),
}

impl Remaining {
    pub(crate) fn from_secs(secs: i64) -> Self {
        if secs <= 0 {
            Remaining::Locked
        } else {
            Remaining::Left(secs)
        }
    }

    pub(crate) fn is_locked(self) -> bool {
        matches!(self, Remaining::Locked)
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Remaining::Locked => f.write_str("locked"),
            Remaining::Left(secs) => f.write_str(&format_hm(*secs)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_whole_hours() {
        assert_eq!(split_hm(14_400), (4, 0));
        assert_eq!(split_hm(3599), (0, 59));
        assert_eq!(split_hm(0), (0, 0));
    }

    #[test]
    fn split_drops_leftover_seconds() {
        assert_eq!(split_hm(3600 + 59), (1, 0));
        assert_eq!(split_hm(9000), (2, 30));
    }

    #[test]
    fn split_truncates_negative_toward_zero() {
        assert_eq!(split_hm(-100), (0, -1));
        assert_eq!(split_hm(-3700), (-1, -1));
    }

    #[test]
    fn format_pads_minutes() {
        assert_eq!(format_hm(14_400), "4h 00m");
        assert_eq!(format_hm(9000), "2h 30m");
        assert_eq!(format_hm(65 * 60), "1h 05m");
        assert_eq!(format_hm(12 * 3600), "12h 00m");
    }

    #[test]
    fn remaining_full_budget() {
        assert_eq!(Remaining::from_secs(14_400).to_string(), "4h 00m");
    }

    #[test]
    fn remaining_zero_or_negative_is_locked() {
        assert_eq!(Remaining::from_secs(0).to_string(), "locked");
        assert_eq!(Remaining::from_secs(-100).to_string(), "locked");
        assert!(Remaining::from_secs(0).is_locked());
        assert!(!Remaining::from_secs(1).is_locked());
    }

    #[test]
    fn remaining_after_ninety_minutes() {
        let remaining = 14_400 - 5400;
        assert_eq!(remaining, 9000);
        assert_eq!(Remaining::from_secs(remaining).to_string(), "2h 30m");
    }

    #[test]
    fn under_a_minute_left_is_not_locked() {
        assert_eq!(Remaining::from_secs(30), Remaining::Left(30));
        assert_eq!(Remaining::from_secs(30).to_string(), "0h 00m");
    }
}
