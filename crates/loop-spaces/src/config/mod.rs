#[allow(clippy::module_inception)]
mod config;
mod hotkey_config;
mod spaces_config;
mod switcher_config;

pub(crate) use {
    config::Config,
    hotkey_config::{HotkeyConfig, ModifierName},
    spaces_config::SpacesConfig,
    switcher_config::SwitcherConfig,
};

pub(crate) const DEFAULT_HOTKEY_KEY: &str = "Backquote";
pub(crate) const DEFAULT_HOTKEY_MODIFIERS: [ModifierName; 1] = [ModifierName::Command];
pub(crate) const DEFAULT_SWITCHER_WIDTH: u32 = 800;
pub(crate) const DEFAULT_SWITCHER_HEIGHT: u32 = 300;
pub(crate) const DEFAULT_SPACE_COUNT: u32 = 5;

pub(crate) fn default_hotkey_key() -> String {
    DEFAULT_HOTKEY_KEY.to_string()
}

pub(crate) fn default_hotkey_modifiers() -> Vec<ModifierName> {
    DEFAULT_HOTKEY_MODIFIERS.to_vec()
}

pub(crate) fn default_switcher_width() -> u32 {
    DEFAULT_SWITCHER_WIDTH
}

pub(crate) fn default_switcher_height() -> u32 {
    DEFAULT_SWITCHER_HEIGHT
}

pub(crate) fn default_space_count() -> u32 {
    DEFAULT_SPACE_COUNT
}
