use crate::{
    AppError, AppResult,
    config::{default_hotkey_key, default_hotkey_modifiers},
};

use std::panic::Location;

use error_location::ErrorLocation;
use global_hotkey::hotkey::HotKey;
use loop_spaces_core::{HotkeyBinding, ModifierMask};
use serde::{Deserialize, Serialize};

/// Modifier names accepted in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifierName {
    /// ⌘ / Super.
    Command,
    /// ⌥ / Alt.
    Option,
    /// Control.
    Control,
    /// Shift.
    Shift,
}

impl ModifierName {
    fn mask(self) -> ModifierMask {
        match self {
            ModifierName::Command => ModifierMask::COMMAND,
            ModifierName::Option => ModifierMask::OPTION,
            ModifierName::Control => ModifierMask::CONTROL,
            ModifierName::Shift => ModifierMask::SHIFT,
        }
    }
}

/// Global hotkey configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotkeyConfig {
    /// Physical key name, e.g. `Backquote`, `Space`, `KeyS`.
    #[serde(default = "default_hotkey_key")]
    pub key: String,

    /// Modifiers held together with the key.
    #[serde(default = "default_hotkey_modifiers")]
    pub modifiers: Vec<ModifierName>,
}

impl HotkeyConfig {
    /// Convert to a binding for the hotkey registry.
    ///
    /// Only the key name is checked here. Whether the combination is free
    /// is up to the OS at registration time.
    #[track_caller]
    pub fn binding(&self) -> AppResult<HotkeyBinding> {
        let key = self.key.trim();

        if key.is_empty() || key.contains('+') {
            return Err(AppError::ConfigError {
                reason: format!(
                    "Hotkey key must be a single key name, got {:?}. List modifiers separately.",
                    self.key
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let parsed: HotKey = key.parse().map_err(|e| AppError::ConfigError {
            reason: format!("Unknown hotkey key {:?}: {}", key, e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let modifiers = self
            .modifiers
            .iter()
            .fold(ModifierMask::empty(), |mask, name| mask | name.mask());

        Ok(HotkeyBinding::new(parsed.key, modifiers))
    }
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            key: default_hotkey_key(),
            modifiers: default_hotkey_modifiers(),
        }
    }
}
