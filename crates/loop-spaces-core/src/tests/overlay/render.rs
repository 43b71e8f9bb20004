use crate::{
    DisplayBounds, SWITCHER_HINTS, SelectableItem, SelectionSession, SurfaceOrigin, SurfaceSize,
    render,
};

fn session(items: Vec<SelectableItem>) -> SelectionSession {
    SelectionSession::initialize(items, Box::new(|_: SelectableItem| {}), Box::new(|| {}))
}

/// WHAT: Tiles mirror the items with cursor and active flags
/// WHY: The surface draws exactly what the session holds
#[test]
fn given_session_when_rendered_then_tiles_follow_items() {
    // Given: Space 2 active
    let session = session(vec![
        SelectableItem::new(1, false),
        SelectableItem::new(2, true),
        SelectableItem::new(3, false),
    ]);

    // When: Rendering
    let frame = render(&session);

    // Then: Three labelled tiles, the second selected and active
    let labels: Vec<&str> = frame.tiles.iter().map(|tile| tile.label.as_str()).collect();
    assert_eq!(labels, vec!["Space 1", "Space 2", "Space 3"]);
    assert!(frame.tiles[1].selected && frame.tiles[1].active);
    assert!(!frame.tiles[0].selected && !frame.tiles[2].selected);
    assert_eq!(frame.hints, SWITCHER_HINTS);
    assert_eq!(frame.summary(), "LoopSpaces: Space 1 [Space 2]* Space 3");
}

/// WHAT: An empty session renders a placeholder summary
/// WHY: The panel must say something when there are no spaces
#[test]
fn given_empty_session_when_rendered_then_no_spaces_summary() {
    // Given/When: No items
    let frame = render(&session(Vec::new()));

    // Then: No tiles
    assert!(frame.tiles.is_empty());
    assert_eq!(frame.summary(), "LoopSpaces: no spaces");
}

/// WHAT: Centering works on displays with non-zero origins and small sizes
/// WHY: Secondary-layout primary displays can start at negative coordinates
#[test]
fn given_offset_display_when_centering_then_origin_relative_to_display() {
    // Given: A display at (-1280, 0) sized 1280x800
    let display = DisplayBounds {
        x: -1280,
        y: 0,
        width: 1280,
        height: 800,
    };

    // When: Centering 800x300, and a surface wider than the display
    let fits = display.centered_origin(SurfaceSize {
        width: 800,
        height: 300,
    });
    let overhangs = display.centered_origin(SurfaceSize {
        width: 1480,
        height: 800,
    });

    // Then: Centered, overhanging equally
    assert_eq!(fits, SurfaceOrigin { x: -1040, y: 250 });
    assert_eq!(overhangs, SurfaceOrigin { x: -1380, y: 0 });
}
