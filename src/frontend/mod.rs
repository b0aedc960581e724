//! Front ends that drive a `Widget`
//!
//! The terminal renderer covers one-shot output and the polling watch loop.
//! The tray front end (feature `tray`) puts the labels in the menu bar.

mod terminal;
#[cfg(feature = "tray")]
mod tray;

pub(crate) use terminal::{RenderMode, WatchOptions, render, watch};

use crate::error::AppError;
use crate::widget::Widget;

/// Run the menu-bar widget until the user picks Quit
#[cfg(feature = "tray")]
pub(crate) fn run_tray(widget: Widget) -> Result<(), AppError> {
    tray::run(widget)
}

#[cfg(not(feature = "tray"))]
pub(crate) fn run_tray(_widget: Widget) -> Result<(), AppError> {
    Err(AppError::TrayUnavailable)
}
