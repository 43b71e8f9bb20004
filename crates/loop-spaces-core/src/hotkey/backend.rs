//! OS hotkey backend seam and the `global-hotkey` implementation.

use crate::{HotkeyBinding, HotkeyBridge};

use global_hotkey::{GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState, hotkey::HotKey};
use tracing::debug;

/// The two OS resources behind a global hotkey: an event handler that
/// receives hotkey events, and the registration of one key combination.
///
/// Implementations report failures as plain reasons; the registry turns
/// them into typed errors and owns the rollback.
pub trait HotkeyBackend {
    /// Handle to an installed event handler.
    type Handler;
    /// Handle to a registered key combination.
    type Hotkey;

    /// Install the hotkey event handler.
    fn install_handler(&mut self) -> Result<Self::Handler, String>;

    /// Register `binding` against an installed handler.
    fn register_hotkey(
        &mut self,
        handler: &Self::Handler,
        binding: &HotkeyBinding,
    ) -> Result<Self::Hotkey, String>;

    /// Id the OS callback reports for presses of `hotkey`.
    fn hotkey_id(&self, hotkey: &Self::Hotkey) -> u32;

    /// Release a registered key combination.
    fn unregister_hotkey(&mut self, handler: &Self::Handler, hotkey: Self::Hotkey)
    -> Result<(), String>;

    /// Remove an installed handler.
    fn remove_handler(&mut self, handler: Self::Handler);
}

/// Opaque OS handles for one live registration.
#[derive(Debug)]
pub struct HotkeyRegistration<H, K> {
    pub(crate) handler: H,
    pub(crate) hotkey: K,
    pub(crate) hotkey_id: u32,
}

/// Backend built on the `global-hotkey` crate.
///
/// A [`GlobalHotKeyManager`] is the event handler: creating it installs the
/// platform hook and dropping it removes the hook. Hotkey events are routed
/// into the global [`HotkeyBridge`].
pub struct GlobalHotkeyBackend {
    _private: (),
}

impl GlobalHotkeyBackend {
    /// Route `global-hotkey` events into the global bridge.
    pub fn new() -> Self {
        let bridge = HotkeyBridge::global();
        GlobalHotKeyEvent::set_event_handler(Some(move |event: GlobalHotKeyEvent| {
            if matches!(event.state, HotKeyState::Pressed) {
                bridge.deliver(event.id);
            }
        }));

        debug!("global-hotkey events routed to hotkey bridge");

        Self { _private: () }
    }
}

impl Default for GlobalHotkeyBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl HotkeyBackend for GlobalHotkeyBackend {
    type Handler = GlobalHotKeyManager;
    type Hotkey = HotKey;

    fn install_handler(&mut self) -> Result<GlobalHotKeyManager, String> {
        GlobalHotKeyManager::new().map_err(|e| format!("Failed to create manager: {}", e))
    }

    fn register_hotkey(
        &mut self,
        handler: &GlobalHotKeyManager,
        binding: &HotkeyBinding,
    ) -> Result<HotKey, String> {
        let hotkey = binding.to_hotkey();
        handler.register(hotkey).map_err(|e| e.to_string())?;
        Ok(hotkey)
    }

    fn hotkey_id(&self, hotkey: &HotKey) -> u32 {
        hotkey.id()
    }

    fn unregister_hotkey(
        &mut self,
        handler: &GlobalHotKeyManager,
        hotkey: HotKey,
    ) -> Result<(), String> {
        handler.unregister(hotkey).map_err(|e| e.to_string())
    }

    fn remove_handler(&mut self, handler: GlobalHotKeyManager) {
        drop(handler);
    }
}
