use chrono::{DateTime, Duration, Utc};

use crate::dashboard::model::trades::TradeRecord;
use crate::time_util::{floor_to_hour, hour_label};

/// 默认聚合窗口：向前24小时
pub const DEFAULT_WINDOW_HOURS: i64 = 24;

/// 一个小时桶：起点对齐整点，计数为窗口内落在该小时的记录数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourlyBucket {
    pub hour_start: DateTime<Utc>,
    pub count: u64,
}

impl HourlyBucket {
    /// 图表横轴标签，HH:MM
    pub fn label(&self) -> String {
        hour_label(self.hour_start)
    }
}

/// 生成覆盖 [start, end] 的连续整点空桶，
/// 含起始小时和 end 所在小时，零计数的桶不省略
pub fn build_hourly_buckets(start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<HourlyBucket> {
    let mut buckets = Vec::new();
    let mut cursor = floor_to_hour(start);
    let last = floor_to_hour(end);
    while cursor <= last {
        buckets.push(HourlyBucket {
            hour_start: cursor,
            count: 0,
        });
        cursor = cursor + Duration::hours(1);
    }
    buckets
}

/// 把窗口内的记录计入所属小时桶。
/// 桶数量只由窗口跨度决定，与记录多少无关，图表因此不会断档。
pub fn aggregate_by_hour(
    records: &[TradeRecord],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Vec<HourlyBucket> {
    let mut buckets = build_hourly_buckets(start, end);
    if buckets.is_empty() {
        return buckets;
    }
    let first = buckets[0].hour_start.timestamp();

    for record in records {
        if record.created_at < start || record.created_at > end {
            continue;
        }
        let offset = floor_to_hour(record.created_at).timestamp() - first;
        let idx = (offset / 3600) as usize;
        if let Some(bucket) = buckets.get_mut(idx) {
            bucket.count += 1;
        }
    }
    buckets
}
