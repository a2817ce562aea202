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
/// 包含服务器、后端存储、认证、探测和文档源等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 后端存储配置
    pub store: StoreSettings,
    /// 仪表盘认证配置
    pub auth: AuthSettings,
    /// 工作器探测配置
    pub probe: ProbeSettings,
    /// 远程文档配置
    pub doc: DocSettings,
    /// 出站HTTP配置
    pub http: HttpSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
    /// 生产模式标志，控制会话Cookie的Secure属性
    pub production: bool,
}

/// 后端存储配置设置
///
/// 三个值全部有效时存储客户端才会被创建，否则所有依赖路由降级
#[derive(Debug, Clone, Deserialize)]
pub struct StoreSettings {
    /// 存储REST端点URL（空字符串表示未配置）
    pub url: String,
    /// 受限客户端使用的匿名密钥
    pub anon_key: String,
    /// 特权客户端使用的服务密钥
    pub service_key: String,
}

/// 仪表盘认证配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    /// 仪表盘PIN码（空字符串表示未配置，认证将直接失败）
    pub pin: String,
}

/// 工作器探测配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ProbeSettings {
    /// 外部工作器API基础URL
    pub base_url: String,
    /// API访问令牌（空字符串表示未配置）
    pub api_token: String,
    /// 账户标识符（空字符串表示未配置）
    pub account_id: String,
}

/// 远程文档配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct DocSettings {
    /// 候选文档源URL列表，按顺序尝试
    pub sources: Vec<String>,
}

/// 出站HTTP配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct HttpSettings {
    /// 出站请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
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
            .set_default("server.production", false)?
            // Store credentials default to unconfigured
            .set_default("store.url", "")?
            .set_default("store.anon_key", "")?
            .set_default("store.service_key", "")?
            // Auth defaults to unconfigured (fails closed)
            .set_default("auth.pin", "")?
            // Default probe settings
            .set_default("probe.base_url", "https://api.cloudflare.com/client/v4")?
            .set_default("probe.api_token", "")?
            .set_default("probe.account_id", "")?
            // Default doc sources, tried in order
            .set_default(
                "doc.sources",
                vec![
                    "https://raw.githubusercontent.com/kirky-x/fleet-hq/main/PLAYBOOK.md"
                        .to_string(),
                    "https://raw.githubusercontent.com/kirky-x/fleet-ops/main/PLAYBOOK.md"
                        .to_string(),
                ],
            )?
            // Default outbound HTTP settings
            .set_default("http.timeout_secs", 10)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("FLEETRS").separator("__"));

        builder.build()?.try_deserialize()
    }
}
