use tracing::{debug, error};

use crate::dashboard::services::get_ticker_service;

/// 行情滚动条定时刷新（默认5分钟一次）
pub async fn refresh_ticker() {
    match get_ticker_service().refresh().await {
        Ok(_) => debug!("ticker定时刷新完成"),
        Err(e) => error!("ticker定时刷新失败: {}", e),
    }
}
