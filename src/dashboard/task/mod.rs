pub mod chart_job;
pub mod health_job;
pub mod ticker_job;
