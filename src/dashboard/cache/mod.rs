pub mod ticker_cache;
