use loop_spaces_core::{HotkeyTrigger, SelectableItem};
use tray_icon::menu::MenuId;

/// Events delivered to the main thread through the tao event loop.
///
/// Hotkey and menu callbacks run outside the loop, and switcher callbacks run
/// while the overlay controller is borrowed, so everything funnels through
/// here and is handled once the loop is back in control.
#[derive(Debug, Clone)]
pub enum UserEvent {
    /// The OS reported the registered hotkey.
    Hotkey(HotkeyTrigger),
    /// The hotkey callback asked for the switcher to be toggled.
    ToggleSwitcher,
    /// The user committed a space in the switcher.
    SpaceChosen(SelectableItem),
    /// The user cancelled the switcher.
    SwitcherDismissed,
    /// A tray menu item was clicked.
    Menu(MenuId),
}
