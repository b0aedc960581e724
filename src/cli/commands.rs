//! CLI subcommand definitions

use clap::Subcommand;

use crate::frontend::RenderMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub(crate) enum Commands {
    /// Show the status label and usage summary (default)
    Status,
    /// Output the status label only, for tmux or shell prompts
    Statusline,
    /// Re-render every refresh interval
    Watch {
        /// Stop after this many renders
        #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
        count: Option<u64>,
        /// Print the label only instead of label and summary
        #[arg(long)]
        short: bool,
    },
    /// Run as a menu-bar widget (requires the `tray` feature)
    Tray,
}

impl Commands {
    pub(crate) fn render_mode(self) -> RenderMode {
        match self {
            Commands::Statusline | Commands::Watch { short: true, .. } => RenderMode::Statusline,
            Commands::Status | Commands::Watch { .. } | Commands::Tray => RenderMode::Full,
        }
    }
}
