use tracing::debug;

use crate::dashboard::services::get_health_service;

/// 行存储连通性轮询（默认60秒一次）
pub async fn poll_store_health() {
    let online = get_health_service().check().await;
    debug!("行存储连通性: {}", online);
}
