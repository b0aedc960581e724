use std::io::Write;
use std::time::Duration;

use crate::display::snapshot_json;
use crate::error::AppError;
use crate::widget::Widget;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RenderMode {
    /// Label line followed by the header line
    Full,
    /// Label only, for tmux or shell prompts
    Statusline,
}

/// Render the widget's current state. JSON is the same for both modes.
pub(crate) fn render(widget: &Widget, mode: RenderMode, json: bool) -> Result<String, AppError> {
    if json {
        return match widget.snapshot() {
            Some(snapshot) => snapshot_json(snapshot, widget.title(), widget.header()),
            None => Ok("{}".to_string()),
        };
    }
    Ok(match mode {
        RenderMode::Full => format!("{}\n{}", widget.title(), widget.header()),
        RenderMode::Statusline => widget.title().to_string(),
    })
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct WatchOptions {
    pub(crate) mode: RenderMode,
    pub(crate) json: bool,
    /// Stop after this many renders; run forever when `None`
    pub(crate) count: Option<u64>,
}

/// Refresh and print, then wait one interval, until `count` renders are done.
/// `sleep` is injected so the loop can be driven without a real clock.
pub(crate) fn watch<W, S>(
    widget: &mut Widget,
    options: WatchOptions,
    out: &mut W,
    mut sleep: S,
) -> Result<(), AppError>
where
    W: Write,
    S: FnMut(Duration),
{
    let interval = widget.settings().interval;
    let mut rendered = 0u64;

    loop {
        widget.refresh();
        let text = render(widget, options.mode, options.json)?;
        // A closed pipe (e.g. `| head`) ends the loop quietly
        if writeln!(out, "{text}").and_then(|()| out.flush()).is_err() {
            tracing::debug!("output closed, stopping watch");
            return Ok(());
        }

        rendered += 1;
        if options.count.is_some_and(|limit| rendered >= limit) {
            return Ok(());
        }
        sleep(interval);
    }
}
