use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::utils::record_key;

/// Seconds recorded for `date` in `content`.
///
/// Lines are scanned in file order. The first line starting with `"<date>:"`
/// whose second `:`-separated field parses as an integer wins; lines that match
/// the prefix but fail to parse are skipped. Anything else yields 0.
pub(crate) fn parse_usage(content: &str, date: &str) -> i64 {
    find_record(content, date).unwrap_or(0)
}

/// Like `parse_usage`, but tells "no usable record" apart from a real `:0`
fn find_record(content: &str, date: &str) -> Option<i64> {
    let prefix = format!("{date}:");
    content
        .lines()
        .filter(|line| line.starts_with(&prefix))
        .find_map(|line| line.split(':').nth(1)?.parse::<i64>().ok())
}

/// Seconds recorded for `date` in the file at `path`, or 0 when the file is
/// missing, unreadable, or has no usable record.
pub(crate) fn read_usage(path: &Path, date: &str) -> i64 {
    match fs::read_to_string(path) {
        Ok(content) => match find_record(&content, date) {
            Some(secs) => {
                tracing::debug!(date, secs, matched = true, "usage record found");
                secs
            }
            None => {
                tracing::debug!(date, matched = false, path = %path.display(), "no usage record, assuming 0");
                0
            }
        },
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "usage log missing, assuming 0");
            0
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), "usage log unreadable ({e}), assuming 0");
            0
        }
    }
}

/// Handle to the usage log. Re-reads the file on every call.
#[derive(Debug, Clone)]
pub(crate) struct UsageLog {
    path: PathBuf,
}

impl UsageLog {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Seconds used on `date`; callers pass the widget's notion of today
    pub(crate) fn today_usage(&self, date: NaiveDate) -> i64 {
        read_usage(&self.path, &record_key(date))
    }
}
