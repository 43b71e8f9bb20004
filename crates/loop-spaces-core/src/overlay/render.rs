//! Pure render step from session state to what the surface should draw.

use crate::SelectionSession;

/// Heading drawn above the tiles.
pub const SWITCHER_TITLE: &str = "LoopSpaces";

/// Key hints drawn below the tiles.
pub const SWITCHER_HINTS: &str = "← Previous  → Next  ↩ Switch  ⎋ Cancel";

/// One tile in the switcher strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitcherTile {
    /// Space id the tile stands for.
    pub id: u32,
    /// Text on the tile.
    pub label: String,
    /// Under the cursor.
    pub selected: bool,
    /// The space the user is currently on.
    pub active: bool,
}

/// Everything the surface needs to draw one state of the switcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitcherFrame {
    /// Heading.
    pub title: &'static str,
    /// Tiles in presentation order.
    pub tiles: Vec<SwitcherTile>,
    /// Key hint line.
    pub hints: &'static str,
}

impl SwitcherFrame {
    /// Single-line rendering, e.g. `LoopSpaces: [Space 1] Space 2*`.
    ///
    /// Brackets mark the selected tile, an asterisk the active one.
    pub fn summary(&self) -> String {
        if self.tiles.is_empty() {
            return format!("{}: no spaces", self.title);
        }

        let tiles: Vec<String> = self
            .tiles
            .iter()
            .map(|tile| {
                let marker = if tile.active { "*" } else { "" };
                if tile.selected {
                    format!("[{}]{}", tile.label, marker)
                } else {
                    format!("{}{}", tile.label, marker)
                }
            })
            .collect();

        format!("{}: {}", self.title, tiles.join(" "))
    }
}

/// Build the frame for the current session state.
pub fn render(session: &SelectionSession) -> SwitcherFrame {
    let cursor = session.cursor_index();

    let tiles = session
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| SwitcherTile {
            id: item.id,
            label: item.label(),
            selected: cursor == Some(index),
            active: item.is_currently_active,
        })
        .collect();

    SwitcherFrame {
        title: SWITCHER_TITLE,
        tiles,
        hints: SWITCHER_HINTS,
    }
}
