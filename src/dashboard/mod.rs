pub mod aggregator;
pub mod cache;
pub mod filter;
pub mod model;
pub mod query;
pub mod role;
pub mod services;
pub mod store;
pub mod task;
