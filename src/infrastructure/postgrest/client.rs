// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::{RepositoryError, UNIQUE_VIOLATION_CODE};
use anyhow::{Context, Result};
use reqwest::{Method, RequestBuilder, Response};
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// 默认请求超时（秒）
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// PostgREST 错误响应体
#[derive(Debug, Default, Deserialize)]
struct PostgrestErrorBody {
    code: Option<String>,
    message: Option<String>,
}

/// Supabase REST 客户端
///
/// 每个请求都携带 service role 密钥作为 `apikey` 和 Bearer 令牌
#[derive(Clone)]
pub struct PostgrestClient {
    http: reqwest::Client,
    base_url: String,
    service_key: String,
}

impl PostgrestClient {
    /// 创建新的客户端
    ///
    /// # 参数
    ///
    /// * `base_url` - Supabase 项目URL
    /// * `service_key` - service role 密钥
    /// * `timeout` - 单次请求超时
    pub fn new(base_url: &str, service_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .with_context(|| format!("invalid Supabase project URL: {}", base_url))?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
            service_key: service_key.into(),
        })
    }

    /// 表的 REST 地址
    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// 构造带认证头的请求
    pub fn request(&self, method: Method, table: &str) -> RequestBuilder {
        self.http
            .request(method, self.table_url(table))
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
    }

    /// 将失败的响应转换为仓库错误
    ///
    /// 错误码为 `23505` 时视为唯一约束冲突
    pub async fn error_from_response(response: Response) -> RepositoryError {
        let status = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();
        let body: PostgrestErrorBody = serde_json::from_str(&text).unwrap_or_default();
        let message = body.message.unwrap_or(text);

        if body.code.as_deref() == Some(UNIQUE_VIOLATION_CODE) {
            RepositoryError::Conflict(message)
        } else {
            RepositoryError::Remote { status, message }
        }
    }
}
