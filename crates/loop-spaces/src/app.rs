use crate::{
    AppError, AppResult, OverlayWindow, OverlayWindowFactory, ProxyTriggerSink, TrayAction,
    TrayManager, UserEvent, config::Config, key_mapping, notifier,
};

use std::sync::{Arc, Mutex, PoisonError};

use loop_spaces_core::{
    GlobalHotkeyBackend, HotkeyRegistry, InMemorySpaceProvider, OverlayController,
    SelectableItem, SpaceProvider, TriggerSink,
};
use tao::{
    event::{ElementState, WindowEvent},
    event_loop::{EventLoopProxy, EventLoopWindowTarget},
    window::WindowId,
};
use tracing::{debug, error, info, instrument, warn};
use tray_icon::menu::MenuEvent;

/// What the event loop should do after an event is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopAction {
    /// Keep waiting for events.
    Continue,
    /// Leave the event loop.
    Exit,
}

/// Main application, owned by the event loop closure on the main thread.
pub struct App {
    config: Config,
    registry: HotkeyRegistry<GlobalHotkeyBackend>,
    overlay: OverlayController<OverlayWindow>,
    spaces: InMemorySpaceProvider,
    tray: TrayManager,
    proxy: EventLoopProxy<UserEvent>,
}

impl App {
    /// Load config, create the tray and register the hotkey.
    ///
    /// A hotkey that cannot be registered is reported but does not stop the
    /// app, so the user can fix the config and reload.
    #[track_caller]
    #[instrument(skip(proxy))]
    pub fn start(proxy: EventLoopProxy<UserEvent>) -> AppResult<Self> {
        let config = Config::load()?;

        let sink: Arc<dyn TriggerSink> = Arc::new(ProxyTriggerSink::new(proxy.clone()));
        let registry = HotkeyRegistry::new(GlobalHotkeyBackend::new(), sink);
        let tray = TrayManager::new()?;
        forward_menu_events(proxy.clone());

        let mut app = Self {
            spaces: InMemorySpaceProvider::new(config.spaces.count),
            config,
            registry,
            overlay: OverlayController::new(),
            tray,
            proxy,
        };

        app.register_hotkey();

        info!("LoopSpaces started");

        Ok(app)
    }

    /// Handle an event posted through the proxy.
    pub fn handle_user_event(
        &mut self,
        event: UserEvent,
        target: &EventLoopWindowTarget<UserEvent>,
    ) -> LoopAction {
        match event {
            UserEvent::Hotkey(trigger) => {
                self.registry.dispatch(trigger);
            }
            UserEvent::ToggleSwitcher => self.toggle_switcher(target),
            UserEvent::SpaceChosen(item) => self.switch_to(item),
            UserEvent::SwitcherDismissed => self.overlay.hide(),
            UserEvent::Menu(id) => match self.tray.action_for(&id) {
                Some(TrayAction::ReloadSettings) => self.apply_settings(Config::load(), "reloaded"),
                Some(TrayAction::ResetPreferences) => {
                    self.apply_settings(Config::reset(), "reset to defaults")
                }
                Some(TrayAction::Quit) => {
                    self.shutdown();
                    return LoopAction::Exit;
                }
                None => debug!(menu_id = ?id, "Unknown menu item"),
            },
        }

        LoopAction::Continue
    }

    /// Route key presses and close requests on the switcher window.
    pub fn handle_window_event(&mut self, window_id: WindowId, event: WindowEvent<'_>) {
        if self.overlay.surface().map(OverlayWindow::id) != Some(window_id) {
            return;
        }

        match event {
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                let key = key_mapping::selection_key(event.physical_key);
                let disposition = self.overlay.handle_key(key);
                debug!(?key, ?disposition, "Switcher key");
            }
            WindowEvent::CloseRequested => self.overlay.hide(),
            _ => {}
        }
    }

    /// Hide the switcher and release the hotkey.
    pub fn shutdown(&mut self) {
        self.overlay.hide();
        self.registry.unregister();
        info!("LoopSpaces shutting down");
    }

    fn toggle_switcher(&mut self, target: &EventLoopWindowTarget<UserEvent>) {
        let items = self.spaces.list_items();
        let factory = OverlayWindowFactory::new(target, &self.config.switcher);

        let commit_proxy = self.proxy.clone();
        let cancel_proxy = self.proxy.clone();

        let result = self.overlay.toggle(
            &factory,
            items,
            move |item| {
                if commit_proxy.send_event(UserEvent::SpaceChosen(item)).is_err() {
                    warn!("Event loop closed, space selection dropped");
                }
            },
            move || {
                if cancel_proxy.send_event(UserEvent::SwitcherDismissed).is_err() {
                    warn!("Event loop closed, dismissal dropped");
                }
            },
        );

        match result {
            Ok(state) => debug!(?state, "Switcher toggled"),
            Err(e) => error!(error = ?AppError::from(e), "Failed to show switcher"),
        }
    }

    fn switch_to(&mut self, item: SelectableItem) {
        self.overlay.hide();

        match self.spaces.activate(item.id) {
            Ok(()) => info!(space_id = item.id, "Switched space"),
            Err(e) => error!(error = ?AppError::from(e), "Failed to switch space"),
        }
    }

    /// Switch to freshly loaded or reset settings and re-register the hotkey.
    fn apply_settings(&mut self, loaded: AppResult<Config>, what: &str) {
        match loaded {
            Ok(config) => {
                self.overlay.hide();
                self.spaces = InMemorySpaceProvider::new(config.spaces.count);
                self.config = config;
                self.register_hotkey();
                info!("Settings {}", what);
            }
            Err(e) => {
                error!(error = ?e, "Failed to apply settings, keeping current ones");
            }
        }
    }

    fn register_hotkey(&mut self) {
        let proxy = self.proxy.clone();

        let result = self.config.hotkey.binding().and_then(|binding| {
            self.registry
                .register(binding, move || {
                    if proxy.send_event(UserEvent::ToggleSwitcher).is_err() {
                        warn!("Event loop closed, toggle dropped");
                    }
                })
                .map(|()| binding)
                .map_err(Into::into)
        });

        match result {
            Ok(binding) => info!(%binding, "Switcher hotkey registered"),
            Err(e) => {
                error!(error = ?e, "Failed to register switcher hotkey");
                let shortcut = self
                    .config
                    .hotkey
                    .binding()
                    .map(|binding| binding.to_string())
                    .unwrap_or_else(|_| self.config.hotkey.key.clone());
                notifier::hotkey_unavailable(&shortcut, &e);
            }
        }

        // A config error leaves the previous binding live.
        if let Err(e) = self.tray.set_binding(self.registry.binding().as_ref()) {
            warn!(error = ?e, "Failed to update tray tooltip");
        }
    }
}

/// Post tray menu clicks onto the event loop.
fn forward_menu_events(proxy: EventLoopProxy<UserEvent>) {
    let proxy = Mutex::new(proxy);

    MenuEvent::set_event_handler(Some(move |event: MenuEvent| {
        let proxy = proxy.lock().unwrap_or_else(PoisonError::into_inner);
        if proxy.send_event(UserEvent::Menu(event.id)).is_err() {
            warn!("Event loop closed, menu event dropped");
        }
    }));
}
