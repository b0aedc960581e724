use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDate;

use crate::consts::{DEFAULT_DAILY_BUDGET_SECS, DEFAULT_REFRESH_INTERVAL_SECS, DEFAULT_USAGE_FILE};
use crate::error::AppError;
use crate::utils::{Timezone, parse_date};

/// On-disk config. Every key is optional; CLI flags take precedence.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) file: Option<PathBuf>,
    #[serde(default)]
    pub(crate) budget: Option<i64>,
    #[serde(default)]
    pub(crate) interval: Option<u64>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) debug: bool,
}

/// Result of searching the config locations. Logging is not up yet when this
/// runs, so diagnostics are carried back to the caller.
#[derive(Debug, Default)]
pub(crate) struct ConfigLoad {
    pub(crate) config: Config,
    pub(crate) loaded_from: Option<PathBuf>,
    pub(crate) rejected: Vec<(PathBuf, String)>,
}

const APP_DIR: &str = "homeclock";
const CONFIG_FILE: &str = "config.toml";

impl Config {
    /// Load `explicit` if given, otherwise the first parseable file from the
    /// search path.
    pub(crate) fn load(explicit: Option<&Path>) -> ConfigLoad {
        match explicit {
            Some(path) => Self::load_explicit(path),
            None => Self::load_from(&Self::search_paths()),
        }
    }

    fn load_explicit(path: &Path) -> ConfigLoad {
        let mut result = Self::load_from(&[path.to_path_buf()]);
        if result.loaded_from.is_none() && result.rejected.is_empty() {
            result
                .rejected
                .push((path.to_path_buf(), "file not found or unreadable".to_string()));
        }
        result
    }

    fn load_from(paths: &[PathBuf]) -> ConfigLoad {
        let mut result = ConfigLoad::default();

        for path in paths {
            let Ok(content) = fs::read_to_string(path) else {
                continue;
            };
            match toml::from_str::<Config>(&content) {
                Ok(config) => {
                    result.config = config;
                    result.loaded_from = Some(path.clone());
                    return result;
                }
                Err(e) => result.rejected.push((path.clone(), e.to_string())),
            }
        }

        result
    }

    /// `~/.config/homeclock/config.toml`, the platform config dir
    /// (`~/Library/Application Support` on macOS), then `~/.homeclock.toml`
    fn search_paths() -> Vec<PathBuf> {
        let home = dirs::home_dir();
        let candidates = [
            home.as_ref()
                .map(|h| h.join(".config").join(APP_DIR).join(CONFIG_FILE)),
            dirs::config_dir().map(|d| d.join(APP_DIR).join(CONFIG_FILE)),
            home.as_ref().map(|h| h.join(format!(".{APP_DIR}.toml"))),
        ];

        let mut paths: Vec<PathBuf> = Vec::new();
        for path in candidates.into_iter().flatten() {
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
        paths
    }
}

/// Validated runtime settings shared by every front end
#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) file: PathBuf,
    pub(crate) budget_secs: i64,
    pub(crate) interval: Duration,
    pub(crate) timezone: Timezone,
    /// Pin "today" to a fixed date instead of the clock
    pub(crate) date: Option<NaiveDate>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            file: PathBuf::from(DEFAULT_USAGE_FILE),
            budget_secs: DEFAULT_DAILY_BUDGET_SECS,
            interval: Duration::from_secs(DEFAULT_REFRESH_INTERVAL_SECS),
            timezone: Timezone::Local,
            date: None,
        }
    }
}

/// Raw, possibly-missing values gathered from CLI and config
#[derive(Debug, Default)]
pub(crate) struct RawSettings<'a> {
    pub(crate) file: Option<&'a Path>,
    pub(crate) budget: Option<i64>,
    pub(crate) interval: Option<u64>,
    pub(crate) timezone: Option<&'a str>,
    pub(crate) date: Option<&'a str>,
}

impl Settings {
    pub(crate) fn resolve(raw: RawSettings<'_>) -> Result<Self, AppError> {
        let defaults = Settings::default();

        let budget_secs = raw.budget.unwrap_or(defaults.budget_secs);
        if budget_secs <= 0 {
            return Err(AppError::InvalidBudget { value: budget_secs });
        }

        let interval = match raw.interval {
            Some(0) => return Err(AppError::InvalidInterval { value: 0 }),
            Some(secs) => Duration::from_secs(secs),
            None => defaults.interval,
        };

        let date = raw.date.map(parse_date).transpose()?;

        Ok(Settings {
            file: raw.file.map(Path::to_path_buf).unwrap_or(defaults.file),
            budget_secs,
            interval,
            timezone: Timezone::parse(raw.timezone)?,
            date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_paths_are_unique_and_app_specific() {
        let paths = Config::search_paths();
        assert!(!paths.is_empty());
        assert!(paths.iter().all(|p| p.to_string_lossy().contains("homeclock")));
        for (i, p) in paths.iter().enumerate() {
            assert!(!paths[i + 1..].contains(p), "duplicate {}", p.display());
        }
    }

    #[test]
    fn explicit_config_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "interval = 5").unwrap();
        let load = Config::load(Some(path.as_path()));
        assert_eq!(load.loaded_from.as_deref(), Some(path.as_path()));
        assert_eq!(load.config.interval, Some(5));
    }

    #[test]
    fn missing_explicit_config_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let load = Config::load(Some(path.as_path()));
        assert!(load.loaded_from.is_none());
        assert_eq!(load.rejected.len(), 1);
        assert_eq!(load.rejected[0].0, path);
        assert!(load.config.interval.is_none());
    }

    #[test]
    fn first_parseable_config_wins() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        let good = dir.path().join("good.toml");
        let later = dir.path().join("later.toml");
        fs::write(&broken, "budget = \"lots\"").unwrap();
        fs::write(&good, "budget = 7200\ninterval = 10\ntimezone = \"UTC\"\n").unwrap();
        fs::write(&later, "budget = 60").unwrap();

        let missing = dir.path().join("missing.toml");
        let load = Config::load_from(&[missing, broken.clone(), good.clone(), later]);

        assert_eq!(load.loaded_from.as_deref(), Some(good.as_path()));
        assert_eq!(load.rejected.len(), 1);
        assert_eq!(load.rejected[0].0, broken);
        assert_eq!(load.config.budget, Some(7200));
        assert_eq!(load.config.interval, Some(10));
        assert_eq!(load.config.timezone.as_deref(), Some("UTC"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "budgett = 10").unwrap();
        let load = Config::load_from(&[path]);
        assert!(load.loaded_from.is_none());
        assert_eq!(load.rejected.len(), 1);
    }

    #[test]
    fn no_files_gives_defaults() {
        let load = Config::load_from(&[]);
        assert!(load.loaded_from.is_none());
        assert!(load.config.file.is_none());
        assert!(!load.config.debug);
    }

    #[test]
    fn resolve_defaults() {
        let settings = Settings::resolve(RawSettings::default()).unwrap();
        assert_eq!(settings.file, PathBuf::from("/var/log/home_usage.timer"));
        assert_eq!(settings.budget_secs, 14_400);
        assert_eq!(settings.interval, Duration::from_secs(30));
        assert!(matches!(settings.timezone, Timezone::Local));
        assert!(settings.date.is_none());
    }

    #[test]
    fn resolve_rejects_bad_values() {
        let bad_budget = RawSettings {
            budget: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            Settings::resolve(bad_budget),
            Err(AppError::InvalidBudget { value: 0 })
        ));

        let bad_interval = RawSettings {
            interval: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            Settings::resolve(bad_interval),
            Err(AppError::InvalidInterval { value: 0 })
        ));

        let bad_date = RawSettings {
            date: Some("yesterday"),
            ..Default::default()
        };
        assert!(matches!(
            Settings::resolve(bad_date),
            Err(AppError::InvalidDate { .. })
        ));

        let bad_tz = RawSettings {
            timezone: Some("Mars/Olympus"),
            ..Default::default()
        };
        assert!(matches!(
            Settings::resolve(bad_tz),
            Err(AppError::InvalidTimezone { .. })
        ));
    }

    #[test]
    fn resolve_pins_date() {
        let raw = RawSettings {
            date: Some("20240101"),
            ..Default::default()
        };
        let settings = Settings::resolve(raw).unwrap();
        assert_eq!(settings.date, NaiveDate::from_ymd_opt(2024, 1, 1));
    }
}
