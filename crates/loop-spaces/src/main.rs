//! LoopSpaces: keyboard-driven space switcher behind a global hotkey.

mod app;
mod config;
mod error;
mod key_mapping;
mod logging;
mod notifier;
mod overlay_window;
mod proxy_sink;
mod tray_action;
mod tray_manager;
mod user_event;

pub(crate) use {
    app::{App, LoopAction},
    error::{AppError, Result as AppResult},
    overlay_window::{OverlayWindow, OverlayWindowFactory},
    proxy_sink::ProxyTriggerSink,
    tray_action::TrayAction,
    tray_manager::TrayManager,
    user_event::UserEvent,
};

use tao::{
    event::{Event, StartCause},
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tracing::error;

/// Application entry point.
fn main() {
    let mut log_guard = logging::init();

    #[cfg_attr(not(target_os = "macos"), allow(unused_mut))]
    let mut event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();

    // No Dock icon and no menu bar; the app lives in the tray.
    #[cfg(target_os = "macos")]
    {
        use tao::platform::macos::{ActivationPolicy, EventLoopExtMacOS};
        event_loop.set_activation_policy(ActivationPolicy::Accessory);
    }

    let proxy = event_loop.create_proxy();

    // Created on Init so the tray and hotkey exist only once the loop is running.
    let mut app: Option<App> = None;

    event_loop.run(move |event, target, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::NewEvents(StartCause::Init) => {
                match App::start(proxy.clone()) {
                    Ok(started) => app = Some(started),
                    Err(e) => {
                        error!("Failed to start LoopSpaces: {:?}", e);
                        *control_flow = ControlFlow::ExitWithCode(1);
                        return;
                    }
                }

                #[cfg(target_os = "macos")]
                unsafe {
                    use core_foundation::runloop::{CFRunLoopGetMain, CFRunLoopWakeUp};
                    CFRunLoopWakeUp(CFRunLoopGetMain());
                }
            }
            Event::UserEvent(user_event) => {
                if let Some(app) = app.as_mut() {
                    if app.handle_user_event(user_event, target) == LoopAction::Exit {
                        *control_flow = ControlFlow::ExitWithCode(0);
                    }
                }
            }
            Event::WindowEvent {
                window_id, event, ..
            } => {
                if let Some(app) = app.as_mut() {
                    app.handle_window_event(window_id, event);
                }
            }
            Event::LoopDestroyed => {
                if let Some(mut app) = app.take() {
                    app.shutdown();
                }
                drop(log_guard.take());
            }
            _ => {}
        }
    });
}
