use crate::{SelectableItem, SpaceError, SpaceResult};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{debug, info, instrument};

/// Source of the spaces offered by the switcher.
///
/// `list_items` is called synchronously right before every presentation.
/// `activate` is the external "switch" action fired after a commit.
pub trait SpaceProvider {
    /// Refresh and return the ordered list of spaces.
    fn list_items(&mut self) -> Vec<SelectableItem>;

    /// Make the space with `id` the active one.
    fn activate(&mut self, id: u32) -> SpaceResult<()>;
}

/// In-memory provider with a fixed number of synthetic spaces.
///
/// Spaces are numbered from 1 and space 1 starts out active. Stands in for
/// the platform integration that enumerates real desktops.
#[derive(Debug, Clone)]
pub struct InMemorySpaceProvider {
    count: u32,
    active_id: u32,
}

impl InMemorySpaceProvider {
    /// Create a provider offering `count` spaces.
    pub fn new(count: u32) -> Self {
        Self {
            count,
            active_id: 1,
        }
    }

    /// Id of the space currently marked active.
    pub fn active_id(&self) -> u32 {
        self.active_id
    }
}

impl SpaceProvider for InMemorySpaceProvider {
    fn list_items(&mut self) -> Vec<SelectableItem> {
        let items: Vec<SelectableItem> = (1..=self.count)
            .map(|id| SelectableItem::new(id, id == self.active_id))
            .collect();

        debug!(count = items.len(), active_id = self.active_id, "Spaces refreshed");

        items
    }

    #[track_caller]
    #[instrument(skip(self))]
    fn activate(&mut self, id: u32) -> SpaceResult<()> {
        if id == 0 || id > self.count {
            return Err(SpaceError::UnknownSpace {
                id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.active_id = id;
        info!(space_id = id, "Switched space");

        Ok(())
    }
}
