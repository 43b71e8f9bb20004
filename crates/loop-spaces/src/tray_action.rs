/// Actions offered by the tray menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayAction {
    /// Re-read the config file and re-register the hotkey.
    ReloadSettings,
    /// Overwrite the config file with defaults and re-register the hotkey.
    ResetPreferences,
    /// Unregister the hotkey and exit.
    Quit,
}
