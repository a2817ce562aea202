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

use crate::domain::models::activity::ActivityLog;
use crate::domain::models::brand::Brand;
use crate::domain::models::system_health::SystemHealthRow;
use crate::domain::models::task::{NewTask, Task, TaskPatch, TaskStatus};
use crate::domain::repositories::restricted_store::{RestrictedStore, StoreError, TaskFilter};
use crate::infrastructure::store::rest_client::RestClient;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{json, Map, Value};
use uuid::Uuid;

/// 任务查询时内嵌品牌信息的select表达式
const TASK_SELECT: &str = "*,brands(id,name,slug)";

/// 受限存储实现
///
/// 基于匿名密钥REST客户端实现的数据访问层
#[derive(Debug, Clone)]
pub struct RestrictedStoreImpl {
    client: RestClient,
}

impl RestrictedStoreImpl {
    /// 创建新的受限存储实例
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

/// 构建任务列表查询参数
///
/// 排序固定为优先级降序、创建时间降序；状态集合与品牌ID
/// 作为独立谓词叠加（逻辑与）
fn task_list_query(filter: &TaskFilter) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("select", TASK_SELECT.to_string()),
        ("order", "priority.desc,created_at.desc".to_string()),
    ];
    if !filter.statuses.is_empty() {
        let statuses: Vec<String> = filter.statuses.iter().map(ToString::to_string).collect();
        query.push(("status", format!("in.({})", statuses.join(","))));
    }
    if let Some(brand_id) = filter.brand_id {
        query.push(("brand_id", format!("eq.{}", brand_id)));
    }
    query
}

/// 构建任务更新请求体
///
/// 每次更新都写入updated_at；状态变为completed的瞬间写入
/// completed_at。状态离开completed时不清除completed_at，
/// 这是沿用的既有行为。
fn patch_body(patch: &TaskPatch, now: DateTime<Utc>) -> Map<String, Value> {
    let mut body = Map::new();
    if let Some(status) = patch.status() {
        body.insert("status".to_string(), json!(status));
        if status == TaskStatus::Completed {
            body.insert("completed_at".to_string(), json!(now));
        }
    }
    if let Some(title) = &patch.title {
        body.insert("title".to_string(), json!(title));
    }
    if let Some(description) = &patch.description {
        body.insert("description".to_string(), json!(description));
    }
    if let Some(priority) = patch.priority {
        body.insert("priority".to_string(), json!(priority));
    }
    if let Some(tags) = &patch.tags {
        body.insert("tags".to_string(), json!(tags));
    }
    body.insert("updated_at".to_string(), json!(now));
    body
}

fn single_row(rows: Vec<Task>) -> Result<Task, StoreError> {
    rows.into_iter().next().ok_or(StoreError::Rejected {
        status: 404,
        message: "task not found".to_string(),
    })
}

#[async_trait]
impl RestrictedStore for RestrictedStoreImpl {
    async fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, StoreError> {
        self.client
            .select("build_queue", &task_list_query(filter))
            .await
    }

    async fn list_active_brands(&self) -> Result<Vec<Brand>, StoreError> {
        self.client
            .select(
                "brands",
                &[
                    ("select", "id,name,slug".to_string()),
                    ("is_active", "eq.true".to_string()),
                    ("order", "name.asc".to_string()),
                ],
            )
            .await
    }

    async fn create_task(&self, new: &NewTask) -> Result<Task, StoreError> {
        let rows = self
            .client
            .insert("build_queue", new, &[("select", TASK_SELECT.to_string())])
            .await?;
        single_row(rows)
    }

    async fn update_task(&self, id: Uuid, patch: &TaskPatch) -> Result<Task, StoreError> {
        let rows = self
            .client
            .update(
                "build_queue",
                &[
                    ("id", format!("eq.{}", id)),
                    ("select", TASK_SELECT.to_string()),
                ],
                &patch_body(patch, Utc::now()),
            )
            .await?;
        single_row(rows)
    }

    async fn delete_task(&self, id: Uuid) -> Result<(), StoreError> {
        self.client
            .delete("build_queue", &[("id", format!("eq.{}", id))])
            .await
    }

    async fn list_system_health(&self) -> Result<Vec<SystemHealthRow>, StoreError> {
        self.client
            .select(
                "system_health",
                &[
                    ("select", "*".to_string()),
                    ("order", "service_name.asc".to_string()),
                ],
            )
            .await
    }

    async fn list_recent_activity(&self, limit: u32) -> Result<Vec<ActivityLog>, StoreError> {
        self.client
            .select(
                "worker_activity_logs",
                &[
                    ("select", "*".to_string()),
                    ("order", "created_at.desc".to_string()),
                    ("limit", limit.to_string()),
                ],
            )
            .await
    }
}
