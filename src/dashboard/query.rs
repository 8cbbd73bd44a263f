use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::dashboard::model::trades::TradeRecord;

/// 可排序字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Id,
    Buyer,
    Seller,
    Amount,
    TradeType,
    CreatedAt,
}

impl SortField {
    /// 对应远程行存储的列名
    pub fn column(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Buyer => "buyer",
            SortField::Seller => "seller",
            SortField::Amount => "amount",
            SortField::TradeType => "trade_type",
            SortField::CreatedAt => "created_at",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: SortField::CreatedAt,
            direction: SortDirection::Desc,
        }
    }
}

impl SortSpec {
    /// 组装远程行存储的排序参数，如 "created_at.desc"
    pub fn to_order_param(&self) -> String {
        let dir = match self.direction {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        };
        format!("{}.{}", self.field.column(), dir)
    }
}

/// 分页参数：页号从0开始
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub index: usize,
    pub size: usize,
}

impl Default for Page {
    fn default() -> Self {
        Self { index: 0, size: 10 }
    }
}

fn compare_field(a: &TradeRecord, b: &TradeRecord, field: SortField) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Buyer => a.buyer.cmp(&b.buyer),
        SortField::Seller => a.seller.cmp(&b.seller),
        SortField::Amount => a.amount.total_cmp(&b.amount),
        SortField::TradeType => a.trade_type.cmp(&b.trade_type),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}

/// 三路比较 + id升序兜底：主键相等时固定按id升序，保证全序、排序结果确定。
/// 注意兜底不随排序方向翻转。
pub fn compare_records(a: &TradeRecord, b: &TradeRecord, spec: &SortSpec) -> Ordering {
    let primary = compare_field(a, b, spec.field);
    let directed = match spec.direction {
        SortDirection::Asc => primary,
        SortDirection::Desc => primary.reverse(),
    };
    match directed {
        Ordering::Equal => a.id.cmp(&b.id),
        other => other,
    }
}

/// 在内存中对整个过滤集排序，之后才做分页切片
pub fn sort_records(records: &mut [TradeRecord], spec: &SortSpec) {
    records.sort_by(|a, b| compare_records(a, b, spec));
}

/// 分页切片 [page*size, page*size+size)，越界时返回空集
pub fn paginate<T: Clone>(rows: &[T], page: &Page) -> Vec<T> {
    if page.size == 0 {
        return Vec::new();
    }
    let from = page.index.saturating_mul(page.size);
    if from >= rows.len() {
        return Vec::new();
    }
    let to = (from + page.size).min(rows.len());
    rows[from..to].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(id: i64, amount: f64) -> TradeRecord {
        TradeRecord {
            id,
            buyer: format!("0xbuyer{}", id),
            seller: format!("0xseller{}", id),
            arbitrator: String::new(),
            amount,
            amount_malformed: false,
            trade_type: "buy".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 20, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_equal_keys_tiebreak_by_id_asc() {
        let mut rows = vec![record(3, 1.0), record(1, 1.0), record(2, 1.0)];
        sort_records(
            &mut rows,
            &SortSpec {
                field: SortField::Amount,
                direction: SortDirection::Desc,
            },
        );
        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        // 主键全部相等，降序下兜底依然是id升序
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_paginate_out_of_range() {
        let rows = vec![record(1, 1.0), record(2, 2.0)];
        let page = Page { index: 5, size: 10 };
        assert!(paginate(&rows, &page).is_empty());
    }
}
