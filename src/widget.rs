//! Application state shared by every front end
//!
//! A `Widget` owns the settings and the two display surfaces (status label
//! and menu header). Front ends call `refresh` from their single event-loop
//! thread and then push `title()`/`header()` to wherever they display them.

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::Settings;
use crate::display::{PLACEHOLDER_HEADER, PLACEHOLDER_LABEL, Remaining, status_label, summary_header};
use crate::usage::UsageLog;

/// Numbers produced by one refresh
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Snapshot {
    pub(crate) date: NaiveDate,
    pub(crate) used_secs: i64,
    pub(crate) budget_secs: i64,
    pub(crate) remaining_secs: i64,
    pub(crate) locked: bool,
}

impl Snapshot {
    pub(crate) fn compute(date: NaiveDate, used_secs: i64, budget_secs: i64) -> Self {
        // Records are arbitrary i64s written by another process
        let remaining_secs = budget_secs.saturating_sub(used_secs);
        Snapshot {
            date,
            used_secs,
            budget_secs,
            remaining_secs,
            locked: Remaining::from_secs(remaining_secs).is_locked(),
        }
    }
}

pub(crate) struct Widget {
    settings: Settings,
    log: UsageLog,
    title: String,
    header: String,
    snapshot: Option<Snapshot>,
}

impl Widget {
    pub(crate) fn new(settings: Settings) -> Self {
        let log = UsageLog::new(settings.file.clone());
        Self {
            settings,
            log,
            title: PLACEHOLDER_LABEL.to_string(),
            header: PLACEHOLDER_HEADER.to_string(),
            snapshot: None,
        }
    }

    pub(crate) fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Status-bar label
    pub(crate) fn title(&self) -> &str {
        &self.title
    }

    /// Menu header line
    pub(crate) fn header(&self) -> &str {
        &self.header
    }

    pub(crate) fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// The day to look up: the pinned `--date`, or today in the configured zone
    pub(crate) fn current_date(&self) -> NaiveDate {
        self.settings
            .date
            .unwrap_or_else(|| self.settings.timezone.today())
    }

    pub(crate) fn refresh(&mut self) -> &Snapshot {
        let date = self.current_date();
        self.refresh_for(date)
    }

    /// Re-read the log for `date` and update both surfaces
    pub(crate) fn refresh_for(&mut self, date: NaiveDate) -> &Snapshot {
        let used = self.log.today_usage(date);
        let snapshot = Snapshot::compute(date, used, self.settings.budget_secs);

        self.title = status_label(snapshot.remaining_secs);
        self.header = summary_header(snapshot.used_secs, snapshot.remaining_secs);

        tracing::debug!(
            date = %snapshot.date,
            used = snapshot.used_secs,
            remaining = snapshot.remaining_secs,
            file = %self.log.path().display(),
            "refreshed"
        );

        self.snapshot.insert(snapshot)
    }
}
