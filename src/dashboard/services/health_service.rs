use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use chrono::Utc;
use tracing::{info, warn};

use crate::dashboard::model::trades::TradesModel;
use crate::dashboard::services::refresh::RefreshSequencer;

/// 行存储连通性状态，展示层据此渲染连接异常横幅
pub struct HealthService {
    online: AtomicBool,
    last_check_ms: AtomicI64,
    seq: RefreshSequencer,
}

impl HealthService {
    pub fn new() -> Self {
        Self {
            online: AtomicBool::new(false),
            last_check_ms: AtomicI64::new(0),
            seq: RefreshSequencer::new(),
        }
    }

    /// 连通性探测。失败不中断定时器，下个周期重试
    pub async fn check(&self) -> bool {
        let seq = self.seq.issue();
        let model = TradesModel::new();
        let online = match model.ping().await {
            Ok(_) => true,
            Err(e) => {
                warn!("行存储探测失败: {}", e);
                false
            }
        };

        if self.seq.try_apply(seq) {
            let was_online = self.online.swap(online, Ordering::SeqCst);
            self.last_check_ms
                .store(Utc::now().timestamp_millis(), Ordering::SeqCst);
            if was_online != online {
                info!("行存储连通性变化: {} -> {}", was_online, online);
            }
        }
        online
    }

    pub fn is_online(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }

    pub fn last_check_ms(&self) -> i64 {
        self.last_check_ms.load(Ordering::SeqCst)
    }
}

impl Default for HealthService {
    fn default() -> Self {
        Self::new()
    }
}
