use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dashboard::model::trades::TradeRecord;

/// 被查询地址在某条交易中的角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeRole {
    Buyer,
    Seller,
    Arbitrator,
}

impl TradeRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeRole::Buyer => "buyer",
            TradeRole::Seller => "seller",
            TradeRole::Arbitrator => "arbitrator",
        }
    }
}

impl FromStr for TradeRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "buyer" => Ok(TradeRole::Buyer),
            "seller" => Ok(TradeRole::Seller),
            "arbitrator" => Ok(TradeRole::Arbitrator),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

/// 交易记录加上解析出的角色，随查询即算即用，不跨刷新保留
#[derive(Debug, Clone)]
pub struct RoleAnnotatedRecord {
    pub record: TradeRecord,
    pub role: Option<TradeRole>,
}

fn addr_eq(field: &str, normalized: &str) -> bool {
    !field.is_empty() && field.to_lowercase() == normalized
}

/// 角色解析，优先级固定 buyer > seller > arbitrator，地址比较大小写不敏感
pub fn resolve_role(address: &str, record: &TradeRecord) -> Option<TradeRole> {
    let normalized = address.to_lowercase();
    if addr_eq(&record.buyer, &normalized) {
        return Some(TradeRole::Buyer);
    }
    if addr_eq(&record.seller, &normalized) {
        return Some(TradeRole::Seller);
    }
    if addr_eq(&record.arbitrator, &normalized) {
        return Some(TradeRole::Arbitrator);
    }
    None
}

/// 判断记录是否属于查询范围：
/// 指定角色时只认该字段精确命中；未指定角色时三个字段任一命中即可
pub fn matches_scope(record: &TradeRecord, address: &str, role: Option<TradeRole>) -> bool {
    let normalized = address.to_lowercase();
    match role {
        Some(TradeRole::Buyer) => addr_eq(&record.buyer, &normalized),
        Some(TradeRole::Seller) => addr_eq(&record.seller, &normalized),
        Some(TradeRole::Arbitrator) => addr_eq(&record.arbitrator, &normalized),
        None => {
            addr_eq(&record.buyer, &normalized)
                || addr_eq(&record.seller, &normalized)
                || addr_eq(&record.arbitrator, &normalized)
        }
    }
}

/// 给记录批量标注角色
pub fn annotate(records: Vec<TradeRecord>, address: Option<&str>) -> Vec<RoleAnnotatedRecord> {
    records
        .into_iter()
        .map(|record| {
            let role = address.and_then(|addr| resolve_role(addr, &record));
            RoleAnnotatedRecord { record, role }
        })
        .collect()
}
