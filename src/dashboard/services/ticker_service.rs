use std::sync::Arc;

use tracing::{debug, error};

use crate::app_config::env::env_u64_or;
use crate::dashboard::cache::ticker_cache::{default_provider, TickerCacheProvider, TickerSnapshot};
use crate::dashboard::model::trades::TradesModel;
use crate::dashboard::services::refresh::RefreshSequencer;
use crate::error::AppError;

/// 行情滚动条默认条数
pub const DEFAULT_TICKER_SIZE: u64 = 5;

/// 行情滚动条刷新服务：独立于任何过滤/排序/分页状态
pub struct TickerService {
    cache: Arc<dyn TickerCacheProvider>,
    seq: RefreshSequencer,
    size: u64,
}

impl TickerService {
    pub fn new(cache: Arc<dyn TickerCacheProvider>, size: u64) -> Self {
        Self {
            cache,
            seq: RefreshSequencer::new(),
            size,
        }
    }

    pub fn from_env() -> Self {
        Self::new(default_provider(), env_u64_or("TICKER_SIZE", DEFAULT_TICKER_SIZE))
    }

    /// 刷新缓存：每次整体替换最近K条，并推进展示纪元
    pub async fn refresh(&self) -> Result<(), AppError> {
        let seq = self.seq.issue();
        let model = TradesModel::new();
        match model.fetch_recent(self.size).await {
            Ok(records) => {
                if !self.seq.try_apply(seq) {
                    debug!("ticker refresh seq={} 已过期，丢弃", seq);
                    return Ok(());
                }
                let epoch = self.cache.replace(records);
                debug!("ticker refresh seq={} epoch={}", seq, epoch);
                Ok(())
            }
            Err(e) => {
                // 保留旧快照，等下一个定时周期
                error!("ticker refresh seq={} 失败: {}", seq, e);
                Err(e)
            }
        }
    }

    pub fn snapshot(&self) -> Option<TickerSnapshot> {
        self.cache.snapshot()
    }
}
