use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::dashboard::filter::FilterSpec;
use crate::dashboard::query::{SortDirection, SortField, SortSpec};
use crate::dashboard::store::{get_store_client, StoreClient};
use crate::error::AppError;

/// trades 表名
const TRADES_TABLE: &str = "trades";

/// 行存储返回的原始行，字段类型不保证干净：
/// amount 可能是 null、数字串或数字，地址字段可能缺失
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "snake_case")]
pub struct RawTradeRow {
    pub id: i64,
    #[serde(default)]
    pub buyer: Option<String>,
    #[serde(default)]
    pub seller: Option<String>,
    #[serde(default)]
    pub arbitrator: Option<String>,
    #[serde(default)]
    pub amount: Value,
    #[serde(default)]
    pub trade_type: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// 归一化后的交易记录，取回后不可变。
/// id 在账本内唯一；账本对引擎而言只追加，不修改不删除。
#[derive(Debug, Clone, PartialEq)]
pub struct TradeRecord {
    pub id: i64,
    pub buyer: String,
    pub seller: String,
    pub arbitrator: String,
    /// 非负金额，畸形输入归零
    pub amount: f64,
    /// 金额原始值是否畸形（null、解析失败、负数）
    pub amount_malformed: bool,
    pub trade_type: String,
    pub created_at: DateTime<Utc>,
}

/// 金额归一化：null -> 0；数字串 -> 解析（失败归0）；数字 -> 原样；
/// 其他表示 -> 先转字符串再解析，兜底为0。
/// 返回归一化值和"原始值是否畸形"标记，归一化集中在这一处做，
/// 调用方不再各自做类型强转。
pub fn normalize_amount(raw: &Value) -> (f64, bool) {
    match raw {
        Value::Null => (0.0, true),
        Value::Number(n) => match n.as_f64() {
            Some(v) if v.is_finite() && v >= 0.0 => (v, false),
            _ => (0.0, true),
        },
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 0.0 => (v, false),
            _ => (0.0, true),
        },
        other => {
            // 尽力而为：转字符串再解析
            let text = other.to_string();
            match text.trim_matches('"').parse::<f64>() {
                Ok(v) if v.is_finite() && v >= 0.0 => (v, false),
                _ => (0.0, true),
            }
        }
    }
}

fn parse_created_at(raw: Option<&str>) -> DateTime<Utc> {
    raw.and_then(|s| {
        let s = s.trim();
        // 行存储通常给RFC3339，偶见不带时区的时间串，当作UTC处理
        DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
            .or_else(|| {
                NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
                    .ok()
                    .map(|ndt| Utc.from_utc_datetime(&ndt))
            })
    })
    // 时间戳也畸形时保留记录，落到纪元起点
    .unwrap_or_else(|| Utc.timestamp_opt(0, 0).single().unwrap_or_else(Utc::now))
}

impl TradeRecord {
    /// 单字段畸形不丢整条记录，换成安全默认值保留下来，
    /// 否则聚合的总数会和行数对不上
    pub fn from_raw(raw: RawTradeRow) -> Self {
        let (amount, amount_malformed) = normalize_amount(&raw.amount);
        if amount_malformed {
            debug!("trade {} 金额畸形，归一化为0: {:?}", raw.id, raw.amount);
        }
        TradeRecord {
            id: raw.id,
            buyer: raw.buyer.unwrap_or_default(),
            seller: raw.seller.unwrap_or_default(),
            arbitrator: raw.arbitrator.unwrap_or_default(),
            amount,
            amount_malformed,
            trade_type: raw.trade_type.unwrap_or_default(),
            created_at: parse_created_at(raw.created_at.as_deref()),
        }
    }
}

/// trades 表的查询模型（只读）
pub struct TradesModel {
    client: &'static StoreClient,
}

impl TradesModel {
    pub fn new() -> Self {
        Self {
            client: get_store_client(),
        }
    }

    /// 按过滤条件拉取记录，返回归一化记录和总行数
    pub async fn fetch(
        &self,
        filter: &FilterSpec,
        sort: &SortSpec,
        limit: u64,
    ) -> Result<(Vec<TradeRecord>, u64), AppError> {
        let mut params: Vec<(String, String)> = vec![("select".to_string(), "*".to_string())];
        params.extend(filter.to_query_params());
        params.push(("order".to_string(), sort.to_order_param()));
        params.push(("limit".to_string(), limit.to_string()));

        let (rows, total): (Vec<RawTradeRow>, u64) =
            self.client.select(TRADES_TABLE, &params).await?;
        debug!("fetch trades: rows={}, total={}", rows.len(), total);

        let records = rows.into_iter().map(TradeRecord::from_raw).collect();
        Ok((records, total))
    }

    /// 拉取最近K条记录，按 created_at 倒序，行情滚动条用，与过滤条件无关
    pub async fn fetch_recent(&self, k: u64) -> Result<Vec<TradeRecord>, AppError> {
        let sort = SortSpec {
            field: SortField::CreatedAt,
            direction: SortDirection::Desc,
        };
        let (records, _) = self.fetch(&FilterSpec::None, &sort, k).await?;
        Ok(records)
    }

    /// 拉取时间窗口内的记录（闭区间），按 created_at 升序，图表聚合用
    pub async fn fetch_window(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<TradeRecord>, AppError> {
        let params: Vec<(String, String)> = vec![
            ("select".to_string(), "*".to_string()),
            ("created_at".to_string(), format!("gte.{}", start.to_rfc3339())),
            ("created_at".to_string(), format!("lte.{}", end.to_rfc3339())),
            ("order".to_string(), "created_at.asc".to_string()),
        ];

        let (rows, _): (Vec<RawTradeRow>, u64) =
            self.client.select(TRADES_TABLE, &params).await?;
        Ok(rows.into_iter().map(TradeRecord::from_raw).collect())
    }

    /// 连通性探测
    pub async fn ping(&self) -> Result<(), AppError> {
        self.client.ping(TRADES_TABLE).await
    }
}
