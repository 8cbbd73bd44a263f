use anyhow::anyhow;
use clap::Parser;
use dotenv::dotenv;
use tracing::info;

use tx_dashboard::app;
use tx_dashboard::app_config::log::setup_logging;
use tx_dashboard::dashboard::filter::classify_search_text;
use tx_dashboard::dashboard::role::TradeRole;
use tx_dashboard::dashboard::services::get_history_service;

/// 交易看板查询引擎
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// 钱包地址，按地址限定历史视图（大小写不敏感）
    #[arg(long)]
    address: Option<String>,

    /// 指定角色：buyer / seller / arbitrator
    #[arg(long)]
    role: Option<String>,

    /// 启动时的搜索词（按ID/地址子串/交易类型自动分类）
    #[arg(long)]
    search: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // 设置日志
    setup_logging().await?;

    let args = Args::parse();

    let role = match args.role.as_deref() {
        Some(r) => Some(r.parse::<TradeRole>().map_err(|e| anyhow!(e))?),
        None => None,
    };
    if role.is_some() && args.address.is_none() {
        return Err(anyhow!("--role 需要同时指定 --address"));
    }

    let history = get_history_service();
    if args.address.is_some() {
        history.set_scope(args.address.clone(), role);
    }
    if let Some(search) = args.search.as_deref() {
        let filter = classify_search_text(search);
        info!("初始搜索词分类结果: {:?}", filter);
        history.set_filter(filter);
    }

    app::bootstrap::run().await
}
