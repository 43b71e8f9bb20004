/// Visibility of the switcher overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    /// Surface not shown; no selection session exists.
    #[default]
    Hidden,
    /// Surface shown with a live selection session.
    Visible,
}
