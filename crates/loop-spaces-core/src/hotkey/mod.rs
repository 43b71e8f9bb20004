mod backend;
mod binding;
mod bridge;
mod registry;

pub use {
    backend::{GlobalHotkeyBackend, HotkeyBackend, HotkeyRegistration},
    binding::{HotkeyBinding, ModifierMask},
    bridge::{HotkeyBridge, HotkeyTrigger, TriggerSink},
    registry::HotkeyRegistry,
};
