//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, RawSettings, Settings};
use crate::error::AppError;

use super::commands::Commands;

#[derive(Debug, Parser)]
#[command(name = "homeclock")]
#[command(about = "Remaining daily home-usage time for statuslines and the menu bar", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Config file to use instead of the default search path
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,

    /// Usage log to read (default: /var/log/home_usage.timer)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub(crate) file: Option<PathBuf>,

    /// Daily budget in seconds (default: 14400)
    #[arg(short, long, global = true, value_name = "SECS")]
    pub(crate) budget: Option<i64>,

    /// Refresh interval in seconds for watch and tray (default: 30)
    #[arg(short, long, global = true, value_name = "SECS")]
    pub(crate) interval: Option<u64>,

    /// Look up this date instead of today (YYYYMMDD or YYYY-MM-DD)
    #[arg(short, long, global = true)]
    pub(crate) date: Option<String>,

    /// Timezone that decides "today" (e.g., "Europe/Berlin", "UTC")
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.debug && config.debug {
            self.debug = true;
        }
        if self.file.is_none() {
            self.file = config.file.clone();
        }
        if self.budget.is_none() {
            self.budget = config.budget;
        }
        if self.interval.is_none() {
            self.interval = config.interval;
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        self
    }

    pub(crate) fn command(&self) -> Commands {
        self.command.unwrap_or(Commands::Status)
    }

    pub(crate) fn settings(&self) -> Result<Settings, AppError> {
        Settings::resolve(RawSettings {
            file: self.file.as_deref(),
            budget: self.budget,
            interval: self.interval,
            timezone: self.timezone.as_deref(),
            date: self.date.as_deref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::RenderMode;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("homeclock").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn default_command_is_status() {
        let cli = parse(&[]);
        assert_eq!(cli.command(), Commands::Status);
        assert_eq!(cli.command().render_mode(), RenderMode::Full);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["statusline", "--file", "/tmp/x.timer", "-b", "600", "-j"]);
        assert_eq!(cli.command(), Commands::Statusline);
        assert_eq!(cli.file.as_deref(), Some(std::path::Path::new("/tmp/x.timer")));
        assert_eq!(cli.budget, Some(600));
        assert!(cli.json);
    }

    #[test]
    fn watch_options() {
        let cli = parse(&["watch", "--count", "2", "--short"]);
        assert_eq!(
            cli.command(),
            Commands::Watch {
                count: Some(2),
                short: true
            }
        );
        assert_eq!(cli.command().render_mode(), RenderMode::Statusline);
    }

    #[test]
    fn watch_count_must_be_positive() {
        let args = ["homeclock", "watch", "--count", "0"];
        assert!(Cli::try_parse_from(args).is_err());
        let cli = parse(&["watch", "--count", "1"]);
        assert_eq!(
            cli.command(),
            Commands::Watch {
                count: Some(1),
                short: false
            }
        );
    }

    #[test]
    fn cli_overrides_config() {
        let config = Config {
            file: Some(PathBuf::from("/from/config")),
            budget: Some(100),
            interval: Some(5),
            timezone: Some("UTC".to_string()),
            debug: true,
        };
        let cli = parse(&["--budget", "200"]).with_config(&config);
        assert_eq!(cli.budget, Some(200));
        assert_eq!(cli.file.as_deref(), Some(std::path::Path::new("/from/config")));
        assert_eq!(cli.interval, Some(5));
        assert_eq!(cli.timezone.as_deref(), Some("UTC"));
        assert!(cli.debug);
    }

    #[test]
    fn settings_validation_errors_surface() {
        let cli = parse(&["--budget=-1"]);
        assert!(matches!(
            cli.settings(),
            Err(AppError::InvalidBudget { value: -1 })
        ));
    }
}
