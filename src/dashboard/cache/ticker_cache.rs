use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

use crate::dashboard::model::trades::TradeRecord;

/// 行情滚动条快照：最近K条记录 + 展示纪元。
/// epoch 每次刷新递增，渲染层据此重启入场动画，不影响数据本身。
#[derive(Debug, Clone)]
pub struct TickerSnapshot {
    pub records: Vec<TradeRecord>,
    pub epoch: u64,
    pub refreshed_at: DateTime<Utc>,
}

/// 抽象：行情快照缓存提供者
pub trait TickerCacheProvider: Send + Sync {
    fn snapshot(&self) -> Option<TickerSnapshot>;

    /// 整体替换缓存集（不做增量合并），并推进展示纪元
    fn replace(&self, records: Vec<TradeRecord>) -> u64;

    fn clear(&self);
}

/// 具体实现：进程内快照
pub struct InMemoryTickerCache {
    inner: RwLock<Option<TickerSnapshot>>,
    epoch: AtomicU64,
}

impl InMemoryTickerCache {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(None),
            epoch: AtomicU64::new(0),
        }
    }
}

impl Default for InMemoryTickerCache {
    fn default() -> Self {
        Self::new()
    }
}

impl TickerCacheProvider for InMemoryTickerCache {
    fn snapshot(&self) -> Option<TickerSnapshot> {
        self.inner.read().ok().and_then(|g| g.clone())
    }

    fn replace(&self, records: Vec<TradeRecord>) -> u64 {
        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        if let Ok(mut guard) = self.inner.write() {
            *guard = Some(TickerSnapshot {
                records,
                epoch,
                refreshed_at: Utc::now(),
            });
        }
        epoch
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = None;
        }
    }
}

/// 默认缓存提供者（可用于全局注入）
pub static DEFAULT_PROVIDER: Lazy<Arc<dyn TickerCacheProvider>> =
    Lazy::new(|| Arc::new(InMemoryTickerCache::new()));

/// 获取默认提供者（便于调用方使用 trait 接口）
pub fn default_provider() -> Arc<dyn TickerCacheProvider> {
    Arc::clone(&DEFAULT_PROVIDER)
}
