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

use crate::application::dto::task_request::{CreateTaskDto, UpdateTaskDto};
use crate::domain::models::activity::ActivityLog;
use crate::domain::models::brand::Brand;
use crate::domain::models::task::Task;
use crate::domain::models::worker::WorkerHealth;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// 客户端错误类型
#[derive(Error, Debug)]
pub enum ClientError {
    /// 传输层错误（包含非成功状态码）
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// 登录被拒绝
    #[error("login rejected: {0}")]
    LoginRejected(String),
}

#[derive(Debug, Deserialize)]
struct WorkersEnvelope {
    workers: Vec<WorkerHealth>,
}

#[derive(Debug, Deserialize)]
struct LogsEnvelope {
    logs: Vec<ActivityLog>,
}

#[derive(Debug, Deserialize)]
struct TaskEnvelope {
    task: Task,
}

#[derive(Debug, Deserialize)]
struct DocEnvelope {
    content: String,
    cached: bool,
}

#[derive(Debug, Deserialize)]
struct AuthCheckEnvelope {
    authenticated: bool,
}

#[derive(Debug, Deserialize)]
struct PinErrorEnvelope {
    #[serde(default)]
    error: Option<String>,
}

/// 流水线视图的一次完整拉取结果
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PipelineData {
    pub tasks: Vec<Task>,
    pub brands: Vec<Brand>,
}

/// 仪表盘API客户端
///
/// 持有Cookie存储的HTTP客户端，登录后自动携带会话Cookie。
/// 轮询器之外也用于任务的乐观更新流程。
pub struct DashboardClient {
    client: reqwest::Client,
    base_url: String,
}

impl DashboardClient {
    /// 创建新的仪表盘客户端
    ///
    /// # 参数
    ///
    /// * `base_url` - 仪表盘API基础URL
    /// * `timeout` - 单个请求的超时时间
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// 提交PIN换取会话Cookie
    pub async fn login(&self, pin: &str) -> Result<(), ClientError> {
        let response = self
            .client
            .post(self.url("/auth/pin"))
            .json(&json!({ "pin": pin }))
            .send()
            .await?;

        if !response.status().is_success() {
            let body: PinErrorEnvelope = response.json().await.unwrap_or(PinErrorEnvelope {
                error: None,
            });
            return Err(ClientError::LoginRejected(
                body.error.unwrap_or_else(|| "unknown error".to_string()),
            ));
        }
        Ok(())
    }

    /// 查询当前会话是否有效
    pub async fn check_auth(&self) -> Result<bool, ClientError> {
        let body: AuthCheckEnvelope = self
            .client
            .get(self.url("/auth/check"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(body.authenticated)
    }

    /// 拉取工作器健康快照
    pub async fn fetch_worker_health(&self) -> Result<Vec<WorkerHealth>, ClientError> {
        let body: WorkersEnvelope = self
            .client
            .get(self.url("/workers/health"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(body.workers)
    }

    /// 拉取工作器活动日志
    pub async fn fetch_worker_activity(&self) -> Result<Vec<ActivityLog>, ClientError> {
        let body: LogsEnvelope = self
            .client
            .get(self.url("/workers/activity"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(body.logs)
    }

    /// 拉取任务流水线（任务与活跃品牌）
    pub async fn fetch_pipeline(&self) -> Result<PipelineData, ClientError> {
        let body: PipelineData = self
            .client
            .get(self.url("/tasks"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(body)
    }

    /// 拉取远程配置文档
    pub async fn fetch_doc(&self) -> Result<(String, bool), ClientError> {
        let body: DocEnvelope = self
            .client
            .get(self.url("/config/doc"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok((body.content, body.cached))
    }

    /// 创建任务
    pub async fn create_task(&self, request: &CreateTaskDto) -> Result<Task, ClientError> {
        let body: TaskEnvelope = self
            .client
            .post(self.url("/tasks"))
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(body.task)
    }

    /// 更新任务
    pub async fn update_task(
        &self,
        id: Uuid,
        request: &UpdateTaskDto,
    ) -> Result<Task, ClientError> {
        let body: TaskEnvelope = self
            .client
            .patch(self.url(&format!("/tasks/{}", id)))
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(body.task)
    }

    /// 删除任务
    pub async fn delete_task(&self, id: Uuid) -> Result<(), ClientError> {
        self.client
            .delete(self.url(&format!("/tasks/{}", id)))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
