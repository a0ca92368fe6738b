use openplan_planner::{validate_layout, PlacedItem, Room, Rotation};

#[test]
fn test_quarter_turn_swaps_footprint() {
    let mut item = PlacedItem::new("counter", 10.0, 10.0, 120.0, 60.0);
    item.rotate();
    assert_eq!(item.rotation, Rotation::Deg90);
    assert_eq!((item.width, item.depth), (60.0, 120.0));
}

#[test]
fn test_four_turns_restore_item() {
    let original = PlacedItem::new("counter", 10.0, 10.0, 120.0, 60.0);
    let mut item = original.clone();
    for _ in 0..4 {
        item.rotate();
    }
    assert_eq!(item, original);
}

#[test]
fn test_rotation_can_cause_wall_violation() {
    // Turned upright it no longer fits the 150 cm depth.
    let room = Room::new(300.0, 150.0, 250.0, 200.0, 80.0);
    let mut item = PlacedItem::new("sofa", 10.0, 10.0, 180.0, 60.0);
    assert!(!validate_layout(std::slice::from_ref(&item), &room)[0].is_wall_violation);

    item.rotate();
    assert!(validate_layout(std::slice::from_ref(&item), &room)[0].is_wall_violation);
}

#[test]
fn test_rotation_from_json_degrees() {
    let item: PlacedItem = serde_json::from_str(
        r#"{"instanceId": "a", "x": 0, "y": 0, "width": 60, "depth": 120, "rotation": 270}"#,
    )
    .unwrap();
    assert_eq!(item.rotation, Rotation::Deg270);
    assert_eq!(item.rotation.next(), Rotation::Deg0);
    assert_eq!(item.rotation.to_string(), "270°");
}
