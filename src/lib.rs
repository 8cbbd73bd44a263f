#![allow(dead_code)]
#![allow(unused_variables)]
#![allow(unused_imports)]

pub mod app;
pub mod app_config;
pub mod dashboard;
pub mod error;
pub mod format_util;
pub mod job;
pub mod time_util;

/// 本地环境标识
pub const ENVIRONMENT_LOCAL: &str = "LOCAL";

/// 历史查询默认单次拉取上限（拉取后在本地做角色过滤/排序/分页）
pub const DEFAULT_FETCH_LIMIT: u64 = 1000;
