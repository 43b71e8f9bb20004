mod item;
mod provider;

pub use {
    item::SelectableItem,
    provider::{InMemorySpaceProvider, SpaceProvider},
};
