/// Keyboard input understood by a selection session.
///
/// The windowing layer maps physical keys onto this alphabet; anything it
/// does not recognize arrives as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKey {
    /// Move the cursor one item back, wrapping around.
    Left,
    /// Move the cursor one item forward, wrapping around.
    Right,
    /// Confirm the highlighted item (Return).
    Commit,
    /// Abandon the switcher (Escape).
    Cancel,
    /// Any other key.
    Other,
}

/// Whether a key event was consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// The key changed state or fired a callback.
    Handled,
    /// The key had no effect.
    Ignored,
}
