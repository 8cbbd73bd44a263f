use tracing::{debug, error};

use crate::dashboard::services::get_chart_service;

/// 小时交易量图表定时刷新（默认每小时一次）
pub async fn refresh_chart() {
    match get_chart_service().refresh().await {
        Ok(_) => debug!("图表定时刷新完成"),
        Err(e) => error!("图表定时刷新失败: {}", e),
    }
}
