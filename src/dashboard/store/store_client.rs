use std::env;

use once_cell::sync::OnceCell;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::AppError;

static STORE_CLIENT: OnceCell<StoreClient> = OnceCell::new();

/// 远程行存储客户端（只读）。
/// 行存储暴露 PostgREST 风格的查询接口：eq/ilike/gte/lt 谓词、
/// order、limit，以及 Prefer: count=exact 返回的总行数。
pub struct StoreClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl StoreClient {
    fn new(base_url: String, api_key: String) -> Self {
        StoreClient {
            client: Client::new(),
            base_url,
            api_key,
        }
    }

    pub fn from_env() -> Self {
        let base_url = env::var("TRANSACTION_STORE_URL").expect("TRANSACTION_STORE_URL is none");
        let api_key = env::var("TRANSACTION_STORE_KEY").expect("TRANSACTION_STORE_KEY is none");
        Self::new(base_url, api_key)
    }

    /// 查询一张表，返回行集合与总行数。
    /// 总行数来自 Content-Range 响应头（如 "0-9/42"），
    /// 头缺失或为 "*" 时退化为本次返回的行数。
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        params: &[(String, String)],
    ) -> Result<(Vec<T>, u64), AppError> {
        let url = format!("{}/rest/v1/{}", self.base_url.trim_end_matches('/'), table);

        let response = self
            .client
            .get(&url)
            .query(params)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Prefer", "count=exact")
            .send()
            .await?;

        let status_code = response.status();
        let total = parse_content_range_total(
            response
                .headers()
                .get("content-range")
                .and_then(|v| v.to_str().ok()),
        );
        let response_body = response.text().await?;
        debug!("store table:{}, status:{}", table, status_code);

        if status_code == StatusCode::OK || status_code == StatusCode::PARTIAL_CONTENT {
            let rows: Vec<T> = serde_json::from_str(&response_body)
                .map_err(|e| AppError::Connection(format!("响应解析失败: {}", e)))?;
            let total = total.unwrap_or(rows.len() as u64);
            Ok((rows, total))
        } else {
            Err(AppError::Connection(format!(
                "行存储请求失败: {} {}",
                status_code, response_body
            )))
        }
    }

    /// 连通性探测，取1行即可
    pub async fn ping(&self, table: &str) -> Result<(), AppError> {
        let params = vec![
            ("select".to_string(), "id".to_string()),
            ("limit".to_string(), "1".to_string()),
        ];
        let _: (Vec<serde_json::Value>, u64) = self.select(table, &params).await?;
        Ok(())
    }
}

fn parse_content_range_total(header: Option<&str>) -> Option<u64> {
    let header = header?;
    let total = header.rsplit('/').next()?;
    total.trim().parse::<u64>().ok()
}

/// 初始化全局客户端（进程内单例）
pub fn init_store() -> &'static StoreClient {
    STORE_CLIENT.get_or_init(StoreClient::from_env)
}

pub fn get_store_client() -> &'static StoreClient {
    STORE_CLIENT.get_or_init(StoreClient::from_env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_content_range_total() {
        assert_eq!(parse_content_range_total(Some("0-9/42")), Some(42));
        assert_eq!(parse_content_range_total(Some("*/120")), Some(120));
        assert_eq!(parse_content_range_total(Some("0-9/*")), None);
        assert_eq!(parse_content_range_total(None), None);
    }
}
