use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use crate::dashboard::model::trades::TradeRecord;

/// 自由文本分类的地址长度阈值：超过30个字符按地址子串处理
pub const ADDRESS_LENGTH_THRESHOLD: usize = 30;

/// 查询过滤条件，同一时刻只有一个生效，后设置的整体覆盖前一个
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterSpec {
    /// 无过滤
    #[default]
    None,
    /// 按交易ID精确匹配
    ById(i64),
    /// 按地址子串匹配（大小写不敏感，buyer/seller/arbitrator 任一命中）
    ByAddressSubstring(String),
    /// 按交易类型精确匹配（大小写敏感）
    ByTradeType(String),
    /// 按日期范围过滤：start 含当日起点，end 为日期边界，向后推一天取开区间
    ByDateRange {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}

/// 自由文本分类，规则按固定优先级从上到下，先命中先生效：
/// 1. 纯数字串 -> ById
/// 2. 长度超过30字符 -> ByAddressSubstring
/// 3. 其余 -> ByTradeType
///
/// 空白输入视为清除过滤。
pub fn classify_search_text(input: &str) -> FilterSpec {
    let text = input.trim();
    if text.is_empty() {
        return FilterSpec::None;
    }

    if text.chars().all(|c| c.is_ascii_digit()) {
        if let Ok(id) = text.parse::<i64>() {
            return FilterSpec::ById(id);
        }
        // 超出i64范围的数字串继续走后面的长度规则
    }

    if text.chars().count() > ADDRESS_LENGTH_THRESHOLD {
        return FilterSpec::ByAddressSubstring(text.to_string());
    }

    FilterSpec::ByTradeType(text.to_string())
}

/// 日期范围的下界（含当日 00:00:00）
pub fn range_start_bound(start: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&start.and_hms_opt(0, 0, 0).unwrap_or_default())
}

/// 日期范围的上界：结束日期向后推一天，取开区间，保证整个结束日都被包含
pub fn range_end_bound(end: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&(end + Duration::days(1)).and_hms_opt(0, 0, 0).unwrap_or_default())
}

impl FilterSpec {
    pub fn is_none(&self) -> bool {
        matches!(self, FilterSpec::None)
    }

    /// 组装远程行存储的查询谓词参数
    pub fn to_query_params(&self) -> Vec<(String, String)> {
        match self {
            FilterSpec::None => vec![],
            FilterSpec::ById(id) => vec![("id".to_string(), format!("eq.{}", id))],
            FilterSpec::ByAddressSubstring(text) => vec![(
                "or".to_string(),
                format!(
                    "(buyer.ilike.*{t}*,seller.ilike.*{t}*,arbitrator.ilike.*{t}*)",
                    t = text
                ),
            )],
            FilterSpec::ByTradeType(text) => {
                vec![("trade_type".to_string(), format!("eq.{}", text))]
            }
            FilterSpec::ByDateRange { start, end } => {
                let mut params = Vec::new();
                if let Some(start) = start {
                    params.push((
                        "created_at".to_string(),
                        format!("gte.{}", range_start_bound(*start).to_rfc3339()),
                    ));
                }
                if let Some(end) = end {
                    params.push((
                        "created_at".to_string(),
                        format!("lt.{}", range_end_bound(*end).to_rfc3339()),
                    ));
                }
                params
            }
        }
    }

    /// 本地判断一条记录是否命中当前过滤条件，与远程谓词语义一致
    pub fn matches(&self, record: &TradeRecord) -> bool {
        match self {
            FilterSpec::None => true,
            FilterSpec::ById(id) => record.id == *id,
            FilterSpec::ByAddressSubstring(text) => {
                let needle = text.to_lowercase();
                record.buyer.to_lowercase().contains(&needle)
                    || record.seller.to_lowercase().contains(&needle)
                    || record.arbitrator.to_lowercase().contains(&needle)
            }
            FilterSpec::ByTradeType(text) => record.trade_type == *text,
            FilterSpec::ByDateRange { start, end } => {
                if let Some(start) = start {
                    if record.created_at < range_start_bound(*start) {
                        return false;
                    }
                }
                if let Some(end) = end {
                    if record.created_at >= range_end_bound(*end) {
                        return false;
                    }
                }
                true
            }
        }
    }
}
