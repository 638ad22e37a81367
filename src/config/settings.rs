// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含服务器、持久化后端、Supabase、数据库、商品符号表和指标等配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 持久化后端选择
    pub persistence: PersistenceSettings,
    /// Supabase (PostgREST) 配置
    pub supabase: Option<SupabaseSettings>,
    /// 数据库配置（仅 database 后端使用）
    pub database: Option<DatabaseSettings>,
    /// 商品符号表配置
    #[serde(default)]
    pub symbols: SymbolSettings,
    /// 指标导出配置
    pub metrics: MetricsSettings,
}

/// 服务器配置设置
#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 持久化后端类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersistenceBackend {
    /// 通过 Supabase REST 接口访问
    Postgrest,
    /// 直接连接数据库
    Database,
}

/// 持久化配置设置
#[derive(Debug, Deserialize)]
pub struct PersistenceSettings {
    pub backend: PersistenceBackend,
}

/// Supabase配置设置
#[derive(Debug, Deserialize)]
pub struct SupabaseSettings {
    /// 项目URL
    #[serde(default)]
    pub url: String,
    /// service role 密钥
    #[serde(default)]
    pub service_role_key: String,
    /// 请求超时时间（秒）
    pub timeout_secs: Option<u64>,
}

/// 数据库配置设置
#[derive(Debug, Deserialize)]
pub struct DatabaseSettings {
    /// 数据库连接URL
    pub url: String,
    /// 最大连接数
    pub max_connections: Option<u32>,
    /// 最小连接数
    pub min_connections: Option<u32>,
    /// 连接超时时间（秒）
    pub connect_timeout: Option<u64>,
    /// 空闲连接超时时间（秒）
    pub idle_timeout: Option<u64>,
}

/// 单条商品符号规则
#[derive(Debug, Clone, Deserialize)]
pub struct SymbolRuleSettings {
    pub keyword: String,
    pub symbol: String,
}

/// 商品符号表配置设置
///
/// 规则按声明顺序匹配；为空时使用内置规则表
#[derive(Debug, Default, Deserialize)]
pub struct SymbolSettings {
    /// 未命中任何规则时使用的符号
    pub default_symbol: Option<String>,
    #[serde(default)]
    pub rules: Vec<SymbolRuleSettings>,
}

/// 指标导出配置设置
#[derive(Debug, Deserialize)]
pub struct MetricsSettings {
    /// 是否启动 Prometheus 导出器
    pub enabled: bool,
    /// 导出器监听地址
    pub listen_addr: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从配置文件和环境变量加载配置，支持默认值。
    /// `PROJECT_URL` 与 `PROJECT_SERVICE_ROLE_KEY` 会覆盖 Supabase 凭据。
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("persistence.backend", "postgrest")?
            .set_default("metrics.enabled", true)?
            .set_default("metrics.listen_addr", "0.0.0.0:9000")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("SALESRS").separator("__"))
            // Credential names used by the edge-function deployment
            .set_override_option("supabase.url", std::env::var("PROJECT_URL").ok())?
            .set_override_option(
                "supabase.service_role_key",
                std::env::var("PROJECT_SERVICE_ROLE_KEY").ok(),
            )?;

        builder.build()?.try_deserialize()
    }

    /// 返回当前后端所需的 Supabase 配置
    pub fn require_supabase(&self) -> Result<&SupabaseSettings, ConfigError> {
        match &self.supabase {
            Some(s) if !s.url.is_empty() && !s.service_role_key.is_empty() => Ok(s),
            _ => Err(ConfigError::NotFound(
                "supabase.url / supabase.service_role_key".to_string(),
            )),
        }
    }

    /// 返回当前后端所需的数据库配置
    pub fn require_database(&self) -> Result<&DatabaseSettings, ConfigError> {
        self.database
            .as_ref()
            .filter(|d| !d.url.is_empty())
            .ok_or_else(|| ConfigError::NotFound("database.url".to_string()))
    }
}
