//! Menu-bar widget
//!
//! The menu mirrors the status item layout: a disabled header showing the
//! usage summary, Refresh, and Quit. The `tao` event loop owns the `Widget`;
//! menu and icon callbacks only forward events into it through a proxy, so
//! every refresh runs on the loop thread.

use std::time::Instant;

use tao::event::{Event, StartCause};
use tao::event_loop::{ControlFlow, EventLoopBuilder};
use tray_icon::menu::accelerator::{Accelerator, CMD_OR_CTRL, Code};
use tray_icon::menu::{Menu, MenuEvent, MenuId, MenuItem, PredefinedMenuItem};
use tray_icon::{Icon, MouseButtonState, TrayIcon, TrayIconBuilder, TrayIconEvent};

use crate::error::AppError;
use crate::widget::Widget;

const ICON_SIZE: u32 = 22;

enum UserEvent {
    Menu(MenuEvent),
    Tray(TrayIconEvent),
}

struct TrayUi {
    tray: TrayIcon,
    header: MenuItem,
    refresh_id: MenuId,
    quit_id: MenuId,
}

impl TrayUi {
    fn build(widget: &Widget) -> Result<Self, AppError> {
        let header = MenuItem::new(widget.header(), false, None);
        let refresh = MenuItem::new(
            "Refresh",
            true,
            Some(Accelerator::new(Some(CMD_OR_CTRL), Code::KeyR)),
        );
        let quit = MenuItem::new(
            "Quit",
            true,
            Some(Accelerator::new(Some(CMD_OR_CTRL), Code::KeyQ)),
        );

        let menu = Menu::new();
        menu.append_items(&[
            &header,
            &PredefinedMenuItem::separator(),
            &refresh,
            &PredefinedMenuItem::separator(),
            &quit,
        ])
        .map_err(|e| AppError::Tray(e.to_string()))?;

        let tray = TrayIconBuilder::new()
            .with_menu(Box::new(menu))
            .with_icon(fallback_icon()?)
            .with_title(widget.title())
            .with_tooltip(widget.header())
            .build()
            .map_err(|e| AppError::Tray(e.to_string()))?;

        Ok(Self {
            tray,
            refresh_id: refresh.id().clone(),
            quit_id: quit.id().clone(),
            header,
        })
    }

    fn show(&self, widget: &Widget) {
        self.tray.set_title(Some(widget.title()));
        self.header.set_text(widget.header());
        if let Err(e) = self.tray.set_tooltip(Some(widget.header())) {
            tracing::debug!("failed to update tooltip: {e}");
        }
    }
}

/// Filled circle. macOS shows the title next to it; Linux indicators need an image.
fn fallback_icon() -> Result<Icon, AppError> {
    let mut rgba = vec![0u8; (ICON_SIZE * ICON_SIZE * 4) as usize];
    let center = ICON_SIZE as f32 / 2.0 - 0.5;
    let radius = ICON_SIZE as f32 / 2.0 - 2.0;

    for y in 0..ICON_SIZE {
        for x in 0..ICON_SIZE {
            let dx = x as f32 - center;
            let dy = y as f32 - center;
            if (dx * dx + dy * dy).sqrt() < radius {
                let idx = ((y * ICON_SIZE + x) * 4) as usize;
                rgba[idx..idx + 4].copy_from_slice(&[0x4c, 0xaf, 0x50, 0xff]);
            }
        }
    }
    Icon::from_rgba(rgba, ICON_SIZE, ICON_SIZE).map_err(|e| AppError::Tray(e.to_string()))
}

fn refresh(widget: &mut Widget, ui: Option<&TrayUi>) {
    widget.refresh();
    if let Some(ui) = ui {
        ui.show(widget);
    }
}

pub(super) fn run(mut widget: Widget) -> Result<(), AppError> {
    #[allow(unused_mut)]
    let mut event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();

    // No Dock icon
    #[cfg(target_os = "macos")]
    {
        use tao::platform::macos::{ActivationPolicy, EventLoopExtMacOS};
        event_loop.set_activation_policy(ActivationPolicy::Accessory);
    }

    let proxy = event_loop.create_proxy();
    MenuEvent::set_event_handler(Some(move |event| {
        let _ = proxy.send_event(UserEvent::Menu(event));
    }));
    let proxy = event_loop.create_proxy();
    TrayIconEvent::set_event_handler(Some(move |event| {
        let _ = proxy.send_event(UserEvent::Tray(event));
    }));

    let interval = widget.settings().interval;
    let mut ui: Option<TrayUi> = None;

    tracing::info!(
        file = %widget.settings().file.display(),
        interval_secs = interval.as_secs(),
        "starting tray"
    );

    event_loop.run(move |event, _, control_flow| match event {
        // The status item must be created once the loop is running
        Event::NewEvents(StartCause::Init) => {
            match TrayUi::build(&widget) {
                Ok(built) => ui = Some(built),
                Err(e) => {
                    eprintln!("{e}");
                    *control_flow = ControlFlow::ExitWithCode(1);
                    return;
                }
            }
            refresh(&mut widget, ui.as_ref());
            *control_flow = ControlFlow::WaitUntil(Instant::now() + interval);
        }
        Event::NewEvents(StartCause::ResumeTimeReached { .. }) => {
            refresh(&mut widget, ui.as_ref());
            *control_flow = ControlFlow::WaitUntil(Instant::now() + interval);
        }
        Event::UserEvent(UserEvent::Menu(event)) => {
            let Some(current) = ui.as_ref() else {
                return;
            };
            if event.id == current.quit_id {
                tracing::info!("quit requested");
                ui = None;
                *control_flow = ControlFlow::Exit;
            } else if event.id == current.refresh_id {
                refresh(&mut widget, ui.as_ref());
            }
        }
        Event::UserEvent(UserEvent::Tray(TrayIconEvent::Click {
            button_state: MouseButtonState::Up,
            ..
        })) => refresh(&mut widget, ui.as_ref()),
        _ => {}
    })
}
