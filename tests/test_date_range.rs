use chrono::{NaiveDate, TimeZone, Utc};

use tx_dashboard::dashboard::filter::{range_end_bound, range_start_bound, FilterSpec};
use tx_dashboard::dashboard::model::trades::TradeRecord;

fn record_at(id: i64, ts: chrono::DateTime<Utc>) -> TradeRecord {
    TradeRecord {
        id,
        buyer: "0xAAA".to_string(),
        seller: "0xBBB".to_string(),
        arbitrator: String::new(),
        amount: 1.0,
        amount_malformed: false,
        trade_type: "buy".to_string(),
        created_at: ts,
    }
}

#[test]
fn test_end_date_covers_whole_day() {
    // 结束日期向后推一天取开区间：S <= created_at < E + 1day
    let start = NaiveDate::from_ymd_opt(2024, 5, 18).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
    let spec = FilterSpec::ByDateRange {
        start: Some(start),
        end: Some(end),
    };

    // 结束日当天的最后一秒仍然包含
    let last_second = Utc.with_ymd_and_hms(2024, 5, 20, 23, 59, 59).unwrap();
    assert!(spec.matches(&record_at(1, last_second)));

    // 次日零点整被排除
    let next_midnight = Utc.with_ymd_and_hms(2024, 5, 21, 0, 0, 0).unwrap();
    assert!(!spec.matches(&record_at(2, next_midnight)));

    // 起始日零点整包含，再早一秒排除
    let start_midnight = Utc.with_ymd_and_hms(2024, 5, 18, 0, 0, 0).unwrap();
    assert!(spec.matches(&record_at(3, start_midnight)));
    let before_start = Utc.with_ymd_and_hms(2024, 5, 17, 23, 59, 59).unwrap();
    assert!(!spec.matches(&record_at(4, before_start)));
}

#[test]
fn test_open_ended_ranges() {
    let day = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();

    let only_start = FilterSpec::ByDateRange {
        start: Some(day),
        end: None,
    };
    assert!(only_start.matches(&record_at(1, Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap())));
    assert!(!only_start.matches(&record_at(2, Utc.with_ymd_and_hms(2024, 5, 19, 0, 0, 0).unwrap())));

    let only_end = FilterSpec::ByDateRange {
        start: None,
        end: Some(day),
    };
    assert!(only_end.matches(&record_at(3, Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap())));
    assert!(!only_end.matches(&record_at(4, Utc.with_ymd_and_hms(2024, 5, 21, 0, 0, 0).unwrap())));
}

#[test]
fn test_bounds_helpers() {
    let day = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
    assert_eq!(
        range_start_bound(day),
        Utc.with_ymd_and_hms(2024, 5, 20, 0, 0, 0).unwrap()
    );
    assert_eq!(
        range_end_bound(day),
        Utc.with_ymd_and_hms(2024, 5, 21, 0, 0, 0).unwrap()
    );
}

#[test]
fn test_date_range_query_params() {
    let spec = FilterSpec::ByDateRange {
        start: Some(NaiveDate::from_ymd_opt(2024, 5, 18).unwrap()),
        end: Some(NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()),
    };
    let params = spec.to_query_params();
    assert_eq!(params.len(), 2);
    assert_eq!(params[0].0, "created_at");
    assert!(params[0].1.starts_with("gte.2024-05-18T00:00:00"));
    assert_eq!(params[1].0, "created_at");
    assert!(params[1].1.starts_with("lt.2024-05-21T00:00:00"));
}
