use std::fmt;

use bitflags::bitflags;
use global_hotkey::hotkey::{Code, HotKey, Modifiers};

bitflags! {
    /// Modifier keys that must be held for a binding to match.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModifierMask: u8 {
        /// ⌘ on macOS, the Super/Windows key elsewhere.
        const COMMAND = 1 << 0;
        /// ⌥ on macOS, Alt elsewhere.
        const OPTION = 1 << 1;
        /// Control.
        const CONTROL = 1 << 2;
        /// Shift.
        const SHIFT = 1 << 3;
    }
}

impl ModifierMask {
    /// Equivalent `global-hotkey` modifier set.
    pub fn to_modifiers(self) -> Modifiers {
        let mut mods = Modifiers::empty();
        if self.contains(Self::COMMAND) {
            mods |= Modifiers::SUPER;
        }
        if self.contains(Self::OPTION) {
            mods |= Modifiers::ALT;
        }
        if self.contains(Self::CONTROL) {
            mods |= Modifiers::CONTROL;
        }
        if self.contains(Self::SHIFT) {
            mods |= Modifiers::SHIFT;
        }
        mods
    }
}

/// A global key combination: one physical key plus modifiers.
///
/// Immutable once registered; changing the combination means registering a
/// new binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HotkeyBinding {
    key: Code,
    modifiers: ModifierMask,
}

impl HotkeyBinding {
    /// Create a binding.
    pub fn new(key: Code, modifiers: ModifierMask) -> Self {
        Self { key, modifiers }
    }

    /// The physical key.
    pub fn key(&self) -> Code {
        self.key
    }

    /// The modifier set.
    pub fn modifiers(&self) -> ModifierMask {
        self.modifiers
    }

    /// The `global-hotkey` form of this binding.
    pub fn to_hotkey(&self) -> HotKey {
        let mods = self.modifiers.to_modifiers();
        HotKey::new((!mods.is_empty()).then_some(mods), self.key)
    }
}

impl Default for HotkeyBinding {
    /// ⌘` (command + backquote).
    fn default() -> Self {
        Self::new(Code::Backquote, ModifierMask::COMMAND)
    }
}

impl fmt::Display for HotkeyBinding {
    /// Modifier symbols in ⌘⌥⌃⇧ order followed by the key, e.g. `⌘⇧``.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (flag, symbol) in [
            (ModifierMask::COMMAND, "⌘"),
            (ModifierMask::OPTION, "⌥"),
            (ModifierMask::CONTROL, "⌃"),
            (ModifierMask::SHIFT, "⇧"),
        ] {
            if self.modifiers.contains(flag) {
                f.write_str(symbol)?;
            }
        }

        match self.key {
            Code::Backquote => f.write_str("`"),
            Code::Tab => f.write_str("⇥"),
            Code::Escape => f.write_str("⎋"),
            Code::Enter => f.write_str("↩"),
            Code::Space => f.write_str("Space"),
            other => {
                let name = format!("{:?}", other);
                f.write_str(name.strip_prefix("Key").unwrap_or(&name))
            }
        }
    }
}
