/// Date format of usage records and `--date`: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Log written by the external usage tracker
pub(crate) const DEFAULT_USAGE_FILE: &str = "/var/log/home_usage.timer";

/// 4 hours
pub(crate) const DEFAULT_DAILY_BUDGET_SECS: i64 = 14_400;

pub(crate) const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 30;

pub(crate) const SECS_PER_HOUR: i64 = 3600;
pub(crate) const SECS_PER_MINUTE: i64 = 60;
