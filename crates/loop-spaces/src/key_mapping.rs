use loop_spaces_core::SelectionKey;
use tao::keyboard::KeyCode;

/// Map a physical key pressed in the switcher to a selection key.
pub fn selection_key(code: KeyCode) -> SelectionKey {
    match code {
        KeyCode::ArrowLeft => SelectionKey::Left,
        KeyCode::ArrowRight => SelectionKey::Right,
        KeyCode::Enter | KeyCode::NumpadEnter => SelectionKey::Commit,
        KeyCode::Escape => SelectionKey::Cancel,
        _ => SelectionKey::Other,
    }
}
