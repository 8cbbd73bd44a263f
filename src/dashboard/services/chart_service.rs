use std::sync::RwLock;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, error};

use crate::app_config::env::env_i64_or;
use crate::dashboard::aggregator::{aggregate_by_hour, HourlyBucket, DEFAULT_WINDOW_HOURS};
use crate::dashboard::model::trades::TradesModel;
use crate::dashboard::services::refresh::RefreshSequencer;
use crate::error::AppError;

/// 小时交易量图表的序列缓存
#[derive(Debug, Clone)]
pub struct ChartSeries {
    pub buckets: Vec<HourlyBucket>,
    pub window_start: DateTime<Utc>,
    pub window_end: DateTime<Utc>,
    pub refreshed_at: DateTime<Utc>,
}

impl ChartSeries {
    /// 横轴标签（HH:MM）
    pub fn labels(&self) -> Vec<String> {
        self.buckets.iter().map(|b| b.label()).collect()
    }

    /// 纵轴计数
    pub fn counts(&self) -> Vec<u64> {
        self.buckets.iter().map(|b| b.count).collect()
    }
}

/// 图表聚合服务：拉取窗口记录并按小时分桶
pub struct ChartService {
    state: RwLock<Option<ChartSeries>>,
    seq: RefreshSequencer,
    window_hours: i64,
}

impl ChartService {
    pub fn new(window_hours: i64) -> Self {
        Self {
            state: RwLock::new(None),
            seq: RefreshSequencer::new(),
            window_hours,
        }
    }

    pub fn from_env() -> Self {
        Self::new(env_i64_or("CHART_WINDOW_HOURS", DEFAULT_WINDOW_HOURS))
    }

    /// 刷新图表序列：窗口为截止当前的向前N小时
    pub async fn refresh(&self) -> Result<(), AppError> {
        let now = Utc::now();
        let start = now - Duration::hours(self.window_hours);
        let seq = self.seq.issue();

        let model = TradesModel::new();
        match model.fetch_window(start, now).await {
            Ok(records) => {
                let buckets = aggregate_by_hour(&records, start, now);
                debug!(
                    "chart refresh seq={} records={} buckets={}",
                    seq,
                    records.len(),
                    buckets.len()
                );

                if let Ok(mut s) = self.state.write() {
                    if !self.seq.try_apply(seq) {
                        debug!("chart refresh seq={} 已过期，丢弃", seq);
                        return Ok(());
                    }
                    *s = Some(ChartSeries {
                        buckets,
                        window_start: start,
                        window_end: now,
                        refreshed_at: now,
                    });
                }
                Ok(())
            }
            Err(e) => {
                // 保留上一份序列，下个刷新周期自然重试
                error!("chart refresh seq={} 失败: {}", seq, e);
                Err(e)
            }
        }
    }

    pub fn series(&self) -> Option<ChartSeries> {
        self.state.read().ok().and_then(|s| s.clone())
    }
}
