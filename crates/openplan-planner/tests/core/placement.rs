use openplan_planner::{LayoutValidator, PlacedItem, PlacementSurface, Room};
use openplan_core::WarningLocale;

fn overlapping_surface() -> PlacementSurface {
    PlacementSurface::new(
        Room::new(500.0, 400.0, 250.0, 200.0, 90.0),
        vec![
            PlacedItem::new("item1", 10.0, 10.0, 100.0, 50.0),
            PlacedItem::new("item2", 10.0, 10.0, 100.0, 50.0),
        ],
        LayoutValidator::default(),
    )
}

#[test]
fn test_new_surface_is_validated() {
    let surface = overlapping_surface();
    assert!(surface.items().iter().all(|i| i.is_collision));
    assert_eq!(surface.summary().collisions, 2);
    assert!(surface.has_blocking_issues());
}

#[test]
fn test_click_then_drag_resolves_overlap() {
    let mut surface = overlapping_surface();
    assert_eq!(surface.select_at(50.0, 30.0), Some("item2"));

    assert_eq!(surface.drag_by(190.0, 190.0), Ok(true));
    let moved = surface.selected_item().unwrap();
    assert_eq!((moved.x, moved.y), (200.0, 200.0));
    assert!(surface.summary().is_clean());
}

#[test]
fn test_rotate_selected_revalidates() {
    let mut surface = PlacementSurface::new(
        Room::new(500.0, 400.0, 250.0, 200.0, 90.0),
        vec![
            PlacedItem::new("long", 10.0, 10.0, 200.0, 40.0),
            PlacedItem::new("box", 30.0, 100.0, 50.0, 50.0),
        ],
        LayoutValidator::default(),
    );
    assert!(surface.summary().is_clean());

    surface.select("long").unwrap();
    assert_eq!(surface.rotate_selected(), Ok(true));
    assert_eq!(surface.issue_count(), 2);

    surface.rotate_selected().unwrap();
    assert!(surface.summary().is_clean());
}

#[test]
fn test_english_warnings() {
    let surface = PlacementSurface::new(
        Room::default(),
        vec![
            PlacedItem::new("a", 10.0, 10.0, 100.0, 50.0),
            PlacedItem::new("b", 60.0, 10.0, 100.0, 50.0),
        ],
        LayoutValidator::new(100.0, WarningLocale::En),
    );
    assert_eq!(surface.items()[0].warnings, vec!["Overlaps another item"]);
}

#[test]
fn test_into_items_keeps_annotations() {
    let items = overlapping_surface().into_items();
    assert_eq!(items.len(), 2);
    assert!(items[0].has_issue());
}
