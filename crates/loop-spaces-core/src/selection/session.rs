//! Per-presentation selection state machine.
//!
//! A session is built from the item list supplied when the switcher opens
//! and lives until the switcher hides. It owns the cursor and the two
//! outcome callbacks, nothing else.

use crate::{KeyDisposition, SelectableItem, SelectionKey};

use tracing::{debug, info};
use uuid::Uuid;

/// Invoked with the highlighted item when the user commits.
pub type CommitCallback = Box<dyn FnMut(SelectableItem)>;

/// Invoked when the user abandons the switcher.
pub type CancelCallback = Box<dyn FnMut()>;

/// Cursor state for one presentation of the switcher.
///
/// Invariant: `cursor` is `Some(i)` with `i < items.len()` whenever `items`
/// is non-empty, and `None` otherwise.
pub struct SelectionSession {
    session_id: Uuid,
    items: Vec<SelectableItem>,
    cursor: Option<usize>,
    finished: bool,
    on_commit: CommitCallback,
    on_cancel: CancelCallback,
}

impl SelectionSession {
    /// Start a session over `items`.
    ///
    /// The cursor starts on the first item marked currently active, on the
    /// first item if none is, and is absent for an empty list.
    pub fn initialize(
        items: Vec<SelectableItem>,
        on_commit: CommitCallback,
        on_cancel: CancelCallback,
    ) -> Self {
        let cursor = if items.is_empty() {
            None
        } else {
            Some(
                items
                    .iter()
                    .position(|item| item.is_currently_active)
                    .unwrap_or(0),
            )
        };

        let session_id = Uuid::new_v4();
        debug!(
            session_id = %session_id,
            item_count = items.len(),
            cursor = ?cursor,
            "Selection session started"
        );

        Self {
            session_id,
            items,
            cursor,
            finished: false,
            on_commit,
            on_cancel,
        }
    }

    /// Apply one key event.
    ///
    /// Once commit or cancel has fired the session is finished and every
    /// further key is ignored until the caller hides the overlay.
    pub fn handle_key(&mut self, key: SelectionKey) -> KeyDisposition {
        let (Some(cursor), false) = (self.cursor, self.finished) else {
            return KeyDisposition::Ignored;
        };
        let len = self.items.len();

        match key {
            SelectionKey::Left => {
                self.move_to((cursor + len - 1) % len);
                KeyDisposition::Handled
            }
            SelectionKey::Right => {
                self.move_to((cursor + 1) % len);
                KeyDisposition::Handled
            }
            SelectionKey::Commit => {
                let item = self.items[cursor];
                self.finished = true;
                info!(session_id = %self.session_id, space_id = item.id, "Selection committed");
                (self.on_commit)(item);
                KeyDisposition::Handled
            }
            SelectionKey::Cancel => {
                self.finished = true;
                info!(session_id = %self.session_id, "Selection cancelled");
                (self.on_cancel)();
                KeyDisposition::Handled
            }
            SelectionKey::Other => KeyDisposition::Ignored,
        }
    }

    /// Index of the highlighted item, `None` for an empty list.
    pub fn cursor_index(&self) -> Option<usize> {
        self.cursor
    }

    /// The highlighted item, `None` for an empty list.
    pub fn selected(&self) -> Option<&SelectableItem> {
        self.cursor.and_then(|index| self.items.get(index))
    }

    /// Items this session was created with, in presentation order.
    pub fn items(&self) -> &[SelectableItem] {
        &self.items
    }

    /// Correlation id used in log output.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Whether commit or cancel has already fired.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn move_to(&mut self, index: usize) {
        debug!(session_id = %self.session_id, from = ?self.cursor, to = index, "Cursor moved");
        self.cursor = Some(index);
    }
}

impl std::fmt::Debug for SelectionSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionSession")
            .field("session_id", &self.session_id)
            .field("items", &self.items)
            .field("cursor", &self.cursor)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}
