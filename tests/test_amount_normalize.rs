use approx::assert_relative_eq;
use serde_json::{json, Value};

use tx_dashboard::dashboard::model::trades::{normalize_amount, RawTradeRow, TradeRecord};

#[test]
fn test_normalize_examples() {
    // null / 数字串 / 数字 三种来源编码
    let cases: Vec<(Value, f64)> = vec![
        (Value::Null, 0.0),
        (json!("0.01"), 0.01),
        (json!(3), 3.0),
    ];
    for (raw, expected) in cases {
        let (value, _) = normalize_amount(&raw);
        assert_relative_eq!(value, expected);
    }
}

#[test]
fn test_malformed_flag() {
    // 畸形输入归零并打标，正常输入不打标
    assert_eq!(normalize_amount(&Value::Null), (0.0, true));
    assert_eq!(normalize_amount(&json!("not-a-number")), (0.0, true));
    assert_eq!(normalize_amount(&json!(-1.5)), (0.0, true));
    assert_eq!(normalize_amount(&json!(true)), (0.0, true));

    assert_eq!(normalize_amount(&json!(0)), (0.0, false));
    assert_eq!(normalize_amount(&json!("2.5")), (2.5, false));
}

#[test]
fn test_malformed_record_is_kept() {
    // 金额畸形不丢记录，换安全默认值保留，行数与聚合才能对得上
    let raw = RawTradeRow {
        id: 7,
        buyer: Some("0xAAA".to_string()),
        seller: None,
        arbitrator: None,
        amount: Value::Null,
        trade_type: Some("buy".to_string()),
        created_at: Some("2024-05-20T12:30:00Z".to_string()),
    };
    let record = TradeRecord::from_raw(raw);
    assert_eq!(record.id, 7);
    assert_relative_eq!(record.amount, 0.0);
    assert!(record.amount_malformed);
    // 缺失的地址字段换成空串，同样保留
    assert_eq!(record.seller, "");
}

#[test]
fn test_created_at_parsing() {
    let raw = RawTradeRow {
        id: 1,
        buyer: None,
        seller: None,
        arbitrator: None,
        amount: json!(1),
        trade_type: None,
        created_at: Some("2024-05-20T12:30:00+00:00".to_string()),
    };
    let record = TradeRecord::from_raw(raw);
    assert_eq!(record.created_at.timestamp(), 1716208200);
}
