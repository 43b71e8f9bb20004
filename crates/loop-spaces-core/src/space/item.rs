/// One switchable space, as supplied by the space-data provider.
///
/// Items are snapshots taken right before the switcher is presented. The
/// selection session only reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectableItem {
    /// Identifier, unique within one presentation.
    pub id: u32,
    /// Whether this is the space the user is currently on.
    pub is_currently_active: bool,
}

impl SelectableItem {
    /// Create an item.
    pub fn new(id: u32, is_currently_active: bool) -> Self {
        Self {
            id,
            is_currently_active,
        }
    }

    /// Label shown on the switcher tile.
    pub fn label(&self) -> String {
        format!("Space {}", self.id)
    }
}
