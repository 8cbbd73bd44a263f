pub mod chart_service;
pub mod health_service;
pub mod history_service;
pub mod refresh;
pub mod ticker_service;

use once_cell::sync::Lazy;

use chart_service::ChartService;
use health_service::HealthService;
use history_service::HistoryService;
use ticker_service::TickerService;

static HISTORY_SERVICE: Lazy<HistoryService> = Lazy::new(HistoryService::new);
static CHART_SERVICE: Lazy<ChartService> = Lazy::new(ChartService::from_env);
static TICKER_SERVICE: Lazy<TickerService> = Lazy::new(TickerService::from_env);
static HEALTH_SERVICE: Lazy<HealthService> = Lazy::new(HealthService::new);

pub fn get_history_service() -> &'static HistoryService {
    &HISTORY_SERVICE
}

pub fn get_chart_service() -> &'static ChartService {
    &CHART_SERVICE
}

pub fn get_ticker_service() -> &'static TickerService {
    &TICKER_SERVICE
}

pub fn get_health_service() -> &'static HealthService {
    &HEALTH_SERVICE
}
