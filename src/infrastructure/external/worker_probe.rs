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

use crate::config::settings::ProbeSettings;
use crate::domain::models::worker::{WorkerHealth, WorkerSpec, WorkerStatus};
use chrono::{DateTime, Utc};
use metrics::counter;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::warn;

/// 外部API返回的脚本列表
#[derive(Debug, Deserialize)]
struct ScriptListResponse {
    result: Vec<Script>,
}

/// 外部API中的一个部署脚本
#[derive(Debug, Deserialize)]
struct Script {
    id: String,
    modified_on: Option<DateTime<Utc>>,
}

/// 探测凭据
#[derive(Debug, Clone)]
struct ProbeCredentials {
    api_token: String,
    account_id: String,
}

/// 工作器舰队探测器
///
/// 向第三方API查询全部部署脚本，将结果映射到静态注册表。
/// 探测永不失败：凭据缺失解析为unknown，请求失败解析为
/// error，两者都是合法的可观测状态而非传输故障。
pub struct WorkerProbe {
    client: reqwest::Client,
    base_url: String,
    credentials: Option<ProbeCredentials>,
}

impl WorkerProbe {
    /// 创建新的舰队探测器
    ///
    /// 令牌或账户ID缺失时探测器进入降级模式
    pub fn new(settings: &ProbeSettings, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let credentials = if settings.api_token.is_empty() || settings.account_id.is_empty() {
            None
        } else {
            Some(ProbeCredentials {
                api_token: settings.api_token.clone(),
                account_id: settings.account_id.clone(),
            })
        };
        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    /// 探测注册表中全部工作器的健康状态
    ///
    /// # 返回值
    ///
    /// 注册表中每个条目对应一条健康快照，顺序与注册表一致
    pub async fn probe(&self, registry: &[WorkerSpec]) -> Vec<WorkerHealth> {
        let Some(credentials) = &self.credentials else {
            counter!("worker_probe_total", "outcome" => "unconfigured").increment(1);
            return uniform_snapshot(registry, WorkerStatus::Unknown);
        };

        match self.fetch_scripts(credentials).await {
            Ok(scripts) => {
                counter!("worker_probe_total", "outcome" => "ok").increment(1);
                merge_with_registry(registry, scripts)
            }
            Err(e) => {
                warn!("Worker probe failed: {}", e);
                counter!("worker_probe_total", "outcome" => "error").increment(1);
                uniform_snapshot(registry, WorkerStatus::Error)
            }
        }
    }

    async fn fetch_scripts(
        &self,
        credentials: &ProbeCredentials,
    ) -> Result<Vec<Script>, reqwest::Error> {
        let url = format!(
            "{}/accounts/{}/workers/scripts",
            self.base_url, credentials.account_id
        );
        let response = self
            .client
            .get(url)
            .bearer_auth(&credentials.api_token)
            .send()
            .await?
            .error_for_status()?;
        let list: ScriptListResponse = response.json().await?;
        Ok(list.result)
    }
}

/// 将注册表全部条目标记为同一状态
fn uniform_snapshot(registry: &[WorkerSpec], status: WorkerStatus) -> Vec<WorkerHealth> {
    registry
        .iter()
        .map(|worker| WorkerHealth {
            id: worker.id.to_string(),
            name: worker.name.to_string(),
            status,
            modified_on: None,
        })
        .collect()
}

/// 将外部脚本列表合并到注册表
///
/// 注册表条目在外部列表中存在即为active并携带最后修改时间，
/// 不存在则为unknown
fn merge_with_registry(registry: &[WorkerSpec], scripts: Vec<Script>) -> Vec<WorkerHealth> {
    let by_id: HashMap<String, Script> = scripts
        .into_iter()
        .map(|script| (script.id.clone(), script))
        .collect();

    registry
        .iter()
        .map(|worker| match by_id.get(worker.id) {
            Some(script) => WorkerHealth {
                id: worker.id.to_string(),
                name: worker.name.to_string(),
                status: WorkerStatus::Active,
                modified_on: script.modified_on,
            },
            None => WorkerHealth {
                id: worker.id.to_string(),
                name: worker.name.to_string(),
                status: WorkerStatus::Unknown,
                modified_on: None,
            },
        })
        .collect()
}
