use chrono::{TimeZone, Utc};
use openplan_core::PlannerError;
use openplan_planner::{CatalogItem, FlowStep, Package, PlannerSession, Room};
use openplan_settings::PlannerConfig;

fn cafe_package() -> Package {
    Package {
        id: "cafe-basic".to_string(),
        name: "카페 기본 패키지".to_string(),
        items: vec![
            CatalogItem::new("counter", "카운터", "Furniture", 180.0, 60.0, 100.0),
            CatalogItem::new("table", "테이블", "Furniture", 80.0, 80.0, 75.0),
            CatalogItem::new("table", "테이블", "Furniture", 80.0, 80.0, 75.0),
            CatalogItem::new("fridge", "냉장고", "Appliance", 70.0, 70.0, 180.0),
        ],
        total_price: 10_000_000,
        grade: None,
        warranty: None,
        has_3d: true,
    }
}

fn planning_session() -> PlannerSession {
    let mut session = PlannerSession::new(PlannerConfig::default());
    session.start_with_package(cafe_package()).unwrap();
    session.submit_room(Room::default()).unwrap();
    session
}

#[test]
fn test_initial_layout_is_clean() {
    let session = planning_session();
    assert_eq!(session.step(), FlowStep::Planner);
    assert_eq!(session.items().len(), 4);
    assert!(session.surface().summary().is_clean());

    let ids: Vec<&str> = session.items().iter().map(|i| i.instance_id.as_str()).collect();
    assert!(ids[1].starts_with("table_1_"));
    assert!(ids[2].starts_with("table_2_"));
    assert_ne!(ids[1], ids[2]);
}

#[test]
fn test_room_below_minimum_is_rejected() {
    let mut session = PlannerSession::new(PlannerConfig::default());
    session.start_with_package(cafe_package()).unwrap();

    let err = session
        .submit_room(Room::new(150.0, 400.0, 250.0, 0.0, 90.0))
        .unwrap_err();
    assert!(matches!(err, PlannerError::RoomTooSmall { .. }));
    assert_eq!(err.user_message(), "공간이 너무 작습니다.");
    assert_eq!(session.step(), FlowStep::SpaceInput);
}

#[test]
fn test_door_past_wall_is_rejected() {
    let mut session = PlannerSession::new(PlannerConfig::default());
    session.start_with_package(cafe_package()).unwrap();
    let err = session
        .submit_room(Room::new(300.0, 300.0, 250.0, 250.0, 90.0))
        .unwrap_err();
    assert!(matches!(err, PlannerError::InvalidRoom { .. }));
}

#[test]
fn test_quote_blocked_until_layout_is_clean() {
    let mut session = planning_session();
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).single().unwrap();

    let first = session.items()[0].instance_id.clone();
    let second = session.items()[1].instance_id.clone();
    {
        let surface = session.surface_mut().unwrap();
        surface.select(&second).unwrap();
        surface.move_selected_to(10.0, 10.0).unwrap();
    }
    assert!(session.surface().has_blocking_issues());
    assert_eq!(
        session.proceed_to_quote(now).unwrap_err(),
        PlannerError::LayoutBlocked { issues: 2 }
    );
    assert_eq!(session.step(), FlowStep::Planner);

    {
        let surface = session.surface_mut().unwrap();
        surface.select(&first).unwrap();
        surface.move_selected_to(250.0, 150.0).unwrap();
    }
    let quote = session.proceed_to_quote(now).unwrap();
    assert_eq!(quote.package_id, "cafe-basic");
    assert_eq!(session.step(), FlowStep::QuoteGen);
    assert!(session.quote().is_some());
}

#[test]
fn test_edit_room_and_resubmit_revalidates() {
    let mut session = planning_session();
    session.edit_room().unwrap();
    assert_eq!(session.step(), FlowStep::SpaceInput);
    assert!(session.surface_mut().is_err());

    // Narrow room: the shelf layout built for 500 cm now crosses the wall.
    session
        .submit_room(Room::new(200.0, 400.0, 250.0, 0.0, 90.0))
        .unwrap();
    assert!(session.surface().summary().wall_violations > 0);
}

#[test]
fn test_restart_clears_everything() {
    let mut session = planning_session();
    session.restart();
    assert_eq!(session.step(), FlowStep::PackageSelect);
    assert!(session.package().is_none());
    assert!(session.items().is_empty());
    assert!(session.quote().is_none());
}

#[test]
fn test_quote_requires_planner_step() {
    let mut session = PlannerSession::new(PlannerConfig::default());
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).single().unwrap();
    assert!(matches!(
        session.proceed_to_quote(now),
        Err(PlannerError::InvalidStep { .. })
    ));
}

#[test]
fn test_new_package_after_quote() {
    let mut session = planning_session();
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).single().unwrap();
    session.proceed_to_quote(now).unwrap();

    session.start_with_package(cafe_package()).unwrap();
    assert_eq!(session.step(), FlowStep::SpaceInput);
    assert!(session.quote().is_none());
    assert!(matches!(
        session.start_with_package(cafe_package()),
        Err(PlannerError::InvalidStep { .. })
    ));
}
