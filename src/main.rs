mod cli;
mod config;
mod consts;
mod display;
mod error;
mod frontend;
mod usage;
mod utils;
mod widget;

use std::io;
use std::process::ExitCode;
use std::thread;

use clap::Parser;

use cli::{Cli, Commands};
use config::Config;
use error::AppError;
use frontend::{WatchOptions, render, run_tray, watch};
use utils::setup_logging;
use widget::Widget;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let load = Config::load(cli.config.as_deref());
    let cli = cli.with_config(&load.config);

    setup_logging(cli.debug);
    if let Some(path) = &load.loaded_from {
        tracing::debug!("loaded config from {}", path.display());
    }
    for (path, e) in &load.rejected {
        tracing::warn!("failed to load config {}: {}", path.display(), e);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let mut widget = Widget::new(cli.settings()?);
    let command = cli.command();

    match command {
        Commands::Status | Commands::Statusline => {
            widget.refresh();
            println!("{}", render(&widget, command.render_mode(), cli.json)?);
            Ok(())
        }
        Commands::Watch { count, .. } => {
            let options = WatchOptions {
                mode: command.render_mode(),
                json: cli.json,
                count,
            };
            watch(&mut widget, options, &mut io::stdout().lock(), thread::sleep)
        }
        Commands::Tray => run_tray(widget),
    }
}
