use chrono::{TimeZone, Utc};

use tx_dashboard::dashboard::model::trades::TradeRecord;
use tx_dashboard::dashboard::role::{annotate, matches_scope, resolve_role, TradeRole};

fn record(id: i64, buyer: &str, seller: &str, arbitrator: &str) -> TradeRecord {
    TradeRecord {
        id,
        buyer: buyer.to_string(),
        seller: seller.to_string(),
        arbitrator: arbitrator.to_string(),
        amount: 1.0,
        amount_malformed: false,
        trade_type: "buy".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 5, 20, 12, 0, 0).unwrap(),
    }
}

#[test]
fn test_single_field_resolution() {
    let r = record(1, "0xAAA", "0xBBB", "0xCCC");
    assert_eq!(resolve_role("0xaaa", &r), Some(TradeRole::Buyer));
    assert_eq!(resolve_role("0xBBB", &r), Some(TradeRole::Seller));
    assert_eq!(resolve_role("0xccc", &r), Some(TradeRole::Arbitrator));
    assert_eq!(resolve_role("0xddd", &r), None);
}

#[test]
fn test_precedence_law() {
    // 同一地址出现在多个字段时：buyer > seller > arbitrator
    let r = record(1, "0xAAA", "0xAAA", "0xAAA");
    assert_eq!(resolve_role("0xaaa", &r), Some(TradeRole::Buyer));

    let r = record(2, "0xBBB", "0xAAA", "0xAAA");
    assert_eq!(resolve_role("0xaaa", &r), Some(TradeRole::Seller));

    let r = record(3, "0xBBB", "0xCCC", "0xAAA");
    assert_eq!(resolve_role("0xaaa", &r), Some(TradeRole::Arbitrator));
}

#[test]
fn test_scope_specific_role() {
    let r = record(1, "0xAAA", "0xBBB", "0xCCC");
    // 指定角色时只认该字段
    assert!(matches_scope(&r, "0xaaa", Some(TradeRole::Buyer)));
    assert!(!matches_scope(&r, "0xaaa", Some(TradeRole::Seller)));
    assert!(!matches_scope(&r, "0xaaa", Some(TradeRole::Arbitrator)));
}

#[test]
fn test_scope_any_role() {
    let r = record(1, "0xAAA", "0xBBB", "0xCCC");
    // 未指定角色时三个字段任一命中即可
    assert!(matches_scope(&r, "0xAAA", None));
    assert!(matches_scope(&r, "0xbbb", None));
    assert!(matches_scope(&r, "0xCcC", None));
    assert!(!matches_scope(&r, "0xddd", None));
}

#[test]
fn test_empty_field_never_matches() {
    let r = record(1, "", "0xBBB", "");
    assert!(!matches_scope(&r, "", None));
    assert_eq!(resolve_role("", &r), None);
}

#[test]
fn test_annotate() {
    let rows = vec![
        record(1, "0xAAA", "0xBBB", "0xCCC"),
        record(2, "0xBBB", "0xAAA", "0xCCC"),
        record(3, "0xBBB", "0xCCC", "0xDDD"),
    ];
    let annotated = annotate(rows, Some("0xaaa"));
    assert_eq!(annotated[0].role, Some(TradeRole::Buyer));
    assert_eq!(annotated[1].role, Some(TradeRole::Seller));
    assert_eq!(annotated[2].role, None);
}
