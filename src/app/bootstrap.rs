use tracing::{error, info};

use crate::app_config::env::env_u64_or;
use crate::dashboard::services::{get_chart_service, get_history_service, get_ticker_service};
use crate::dashboard::store::store_client::init_store;
use crate::dashboard::task::{chart_job, health_job, ticker_job};
use crate::job::TaskScheduler;

/// 三个周期定时器的默认间隔（毫秒）
const DEFAULT_HEALTH_POLL_MS: u64 = 60_000;
const DEFAULT_CHART_REFRESH_MS: u64 = 3_600_000;
const DEFAULT_TICKER_REFRESH_MS: u64 = 300_000;

/// 启动时的初次加载：失败只记日志，等定时器或用户操作再试
async fn run_initial_loads() {
    if let Err(e) = get_history_service().reload().await {
        error!("初次加载历史记录失败: {}", e);
    }
    if let Err(e) = get_chart_service().refresh().await {
        error!("初次加载图表序列失败: {}", e);
    }
    if let Err(e) = get_ticker_service().refresh().await {
        error!("初次加载行情滚动条失败: {}", e);
    }
}

/// 应用入口总编排：初始化/初次加载/定时器/信号/优雅关闭
pub async fn run() -> anyhow::Result<()> {
    // 初始化行存储客户端（只读）
    let _ = init_store();

    run_initial_loads().await;

    // 三个独立定时器：连通性轮询、图表刷新、行情刷新。
    // 回调里spawn出去，慢响应不会拖住下一个tick；
    // 新旧响应由各服务内部的序号器裁决。
    let mut scheduler = TaskScheduler::new();

    scheduler.add_periodic_task(
        "store_health_poll".to_string(),
        env_u64_or("HEALTH_POLL_MS", DEFAULT_HEALTH_POLL_MS),
        || async {
            tokio::spawn(health_job::poll_store_health());
        },
    );

    scheduler.add_periodic_task(
        "chart_refresh".to_string(),
        env_u64_or("CHART_REFRESH_MS", DEFAULT_CHART_REFRESH_MS),
        || async {
            tokio::spawn(chart_job::refresh_chart());
        },
    );

    scheduler.add_periodic_task(
        "ticker_refresh".to_string(),
        env_u64_or("TICKER_REFRESH_MS", DEFAULT_TICKER_REFRESH_MS),
        || async {
            tokio::spawn(ticker_job::refresh_ticker());
        },
    );

    info!("定时任务已注册: {} 个", scheduler.task_count());

    // 等退出信号，随后优雅关闭
    let signal_name = setup_shutdown_signals().await;
    info!("接收到 {} 信号，开始优雅关闭...", signal_name);

    scheduler.shutdown().await;
    info!("应用已优雅退出");
    Ok(())
}

/// 设置多种退出信号处理
async fn setup_shutdown_signals() -> &'static str {
    use tokio::signal;

    #[cfg(unix)]
    {
        let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to register SIGTERM handler");
        let mut sigint = signal::unix::signal(signal::unix::SignalKind::interrupt())
            .expect("Failed to register SIGINT handler");

        tokio::select! {
            _ = sigterm.recv() => "SIGTERM",
            _ = sigint.recv() => "SIGINT",
        }
    }

    #[cfg(not(unix))]
    {
        signal::ctrl_c().await.expect("Failed to listen for ctrl-c");
        "CTRL+C"
    }
}
