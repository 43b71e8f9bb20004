use crate::{InMemorySpaceProvider, SelectableItem, SpaceError, SpaceProvider};

/// WHAT: A fresh provider lists spaces 1..=N with space 1 active
/// WHY: The switcher needs a deterministic starting point
#[test]
fn given_new_provider_when_listing_then_first_space_active() {
    // Given: Five spaces
    let mut provider = InMemorySpaceProvider::new(5);

    // When: Listing
    let items = provider.list_items();

    // Then: Ids 1..=5, only 1 active
    let ids: Vec<u32> = items.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(items[0], SelectableItem::new(1, true));
    assert_eq!(items.iter().filter(|item| item.is_currently_active).count(), 1);
}

/// WHAT: Activating a space moves the active flag
/// WHY: The next presentation must open on the space the user switched to
#[test]
#[allow(clippy::unwrap_used)]
fn given_provider_when_activating_space_then_next_listing_reflects_it() {
    // Given: Five spaces
    let mut provider = InMemorySpaceProvider::new(5);

    // When: Activating space 3
    provider.activate(3).unwrap();

    // Then: Space 3 is the only active one
    let items = provider.list_items();
    assert_eq!(provider.active_id(), 3);
    let active: Vec<u32> = items
        .iter()
        .filter(|item| item.is_currently_active)
        .map(|item| item.id)
        .collect();
    assert_eq!(active, vec![3]);
}

/// WHAT: Unknown ids are rejected and leave the active space alone
/// WHY: A stale commit must not corrupt provider state
#[test]
fn given_provider_when_activating_unknown_space_then_unknown_space_error() {
    // Given: Three spaces
    let mut provider = InMemorySpaceProvider::new(3);

    // When: Activating 0 and 4
    let zero = provider.activate(0);
    let past_end = provider.activate(4);

    // Then: Both fail, space 1 still active
    assert!(matches!(zero, Err(SpaceError::UnknownSpace { id: 0, .. })));
    assert!(matches!(past_end, Err(SpaceError::UnknownSpace { id: 4, .. })));
    assert_eq!(provider.active_id(), 1);
}

/// WHAT: A provider with no spaces lists nothing
/// WHY: The switcher must cope with an empty list
#[test]
fn given_zero_spaces_when_listing_then_empty() {
    // Given/When: Zero spaces
    let mut provider = InMemorySpaceProvider::new(0);

    // Then: Empty list
    assert!(provider.list_items().is_empty());
}
