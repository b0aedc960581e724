use chrono::{DateTime, FixedOffset, Local, NaiveDate, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::error::AppError;

/// Zone whose midnight starts a new usage day. Has to agree with the process
/// writing the log.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) enum Timezone {
    #[default]
    Local,
    Named(Tz),
    Fixed(FixedOffset),
}

impl Timezone {
    /// `local`, `utc`/`z`, an IANA name, or a fixed offset like `+05:30` / `-0800`
    pub(crate) fn parse(value: Option<&str>) -> Result<Self, AppError> {
        let raw = value.map(str::trim).unwrap_or_default();
        match raw.to_ascii_lowercase().as_str() {
            "" | "local" => return Ok(Timezone::Local),
            "utc" | "z" => return Ok(Timezone::Named(chrono_tz::UTC)),
            _ => {}
        }
        if raw.starts_with(['+', '-']) {
            return parse_offset(raw)
                .map(Timezone::Fixed)
                .ok_or_else(|| AppError::InvalidTimezone {
                    input: raw.to_string(),
                });
        }
        Tz::from_str(raw)
            .map(Timezone::Named)
            .map_err(|_| AppError::InvalidTimezone {
                input: raw.to_string(),
            })
    }

    /// Calendar date of `utc` in this timezone
    pub(crate) fn date_at(self, utc: DateTime<Utc>) -> NaiveDate {
        match self {
            Timezone::Local => utc.with_timezone(&Local).date_naive(),
            Timezone::Named(tz) => utc.with_timezone(&tz).date_naive(),
            Timezone::Fixed(offset) => utc.with_timezone(&offset).date_naive(),
        }
    }

    pub(crate) fn today(self) -> NaiveDate {
        self.date_at(Utc::now())
    }
}

/// `+HH:MM`, `+HHMM` or `+HH`, up to 23:59 either side
fn parse_offset(raw: &str) -> Option<FixedOffset> {
    let (sign, digits) = match raw.split_at(1) {
        ("+", rest) => (1, rest),
        ("-", rest) => (-1, rest),
        _ => return None,
    };
    let digits = digits.replace(':', "");
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let (hours, minutes) = match digits.len() {
        2 => (digits.parse::<i32>().ok()?, 0),
        4 => (digits[..2].parse::<i32>().ok()?, digits[2..].parse::<i32>().ok()?),
        _ => return None,
    };
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
