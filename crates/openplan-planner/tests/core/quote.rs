use chrono::{Days, TimeZone, Utc};
use openplan_planner::{Package, QuoteEstimate};
use openplan_settings::QuoteSettings;

fn package(total_price: u64) -> Package {
    Package {
        id: "office-small".to_string(),
        name: "소형 사무실".to_string(),
        items: Vec::new(),
        total_price,
        grade: Some("S".to_string()),
        warranty: None,
        has_3d: false,
    }
}

#[test]
fn test_quote_arithmetic() {
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).single().unwrap();
    let quote = QuoteEstimate::build(&package(10_000_000), &QuoteSettings::default(), now);

    assert_eq!(quote.logistics_cost, 200_000);
    assert_eq!(quote.installation_cost, 300_000);
    assert_eq!(quote.subtotal, 10_500_000);
    assert_eq!(quote.vat, 1_050_000);
    assert_eq!(quote.total_cost, 11_550_000);
    assert_eq!(quote.deposit, 1_155_000);
    assert_eq!(quote.valid_until, quote.issued_on + Days::new(7));
}

#[test]
fn test_quote_defaults_and_overrides() {
    let now = Utc.with_ymd_and_hms(2024, 12, 28, 23, 0, 0).single().unwrap();
    let quote = QuoteEstimate::build(&package(1), &QuoteSettings::default(), now);
    assert_eq!(quote.grade, "S");
    assert_eq!(quote.warranty_period, "14일");
    assert!(!quote.consulting_included);
    assert_eq!(quote.valid_until.to_string(), "2025-01-04");
}

#[test]
fn test_quote_json_shape() {
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).single().unwrap();
    let quote = QuoteEstimate::build(&package(10_000_000), &QuoteSettings::default(), now);
    let json = serde_json::to_value(&quote).unwrap();
    assert_eq!(json["totalCost"], 11_550_000);
    assert_eq!(json["has3D"], false);
    assert_eq!(json["issuedOn"], "2024-03-01");
}
