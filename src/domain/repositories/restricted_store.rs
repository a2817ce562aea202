// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::activity::ActivityLog;
use crate::domain::models::brand::Brand;
use crate::domain::models::system_health::SystemHealthRow;
use crate::domain::models::task::{NewTask, Task, TaskPatch, TaskStatus};
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

/// 存储错误类型
#[derive(Error, Debug)]
pub enum StoreError {
    /// 传输层错误
    #[error("store request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// 存储拒绝请求
    #[error("store returned {status}: {message}")]
    Rejected { status: u16, message: String },
    /// 响应负载解码失败
    #[error("store returned malformed payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// 任务列表过滤条件
///
/// 状态集合与品牌ID是两个独立谓词，同时给出时取交集
#[derive(Debug, Default, Clone)]
pub struct TaskFilter {
    pub statuses: Vec<TaskStatus>,
    pub brand_id: Option<Uuid>,
}

/// 受限存储特质
///
/// 使用匿名密钥的数据访问接口，覆盖任务流水线CRUD
/// 与常规读取。存储未配置时该接口不存在，路由自行降级。
#[async_trait]
pub trait RestrictedStore: Send + Sync {
    /// 列出任务，按优先级降序、创建时间降序排列，内嵌品牌信息
    async fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, StoreError>;
    /// 列出活跃品牌，按名称排序
    async fn list_active_brands(&self) -> Result<Vec<Brand>, StoreError>;
    /// 创建新任务
    async fn create_task(&self, new: &NewTask) -> Result<Task, StoreError>;
    /// 部分更新任务，自动更新updated_at，状态变为completed时写入completed_at
    async fn update_task(&self, id: Uuid, patch: &TaskPatch) -> Result<Task, StoreError>;
    /// 删除任务
    async fn delete_task(&self, id: Uuid) -> Result<(), StoreError>;
    /// 列出系统健康记录，按服务名排序
    async fn list_system_health(&self) -> Result<Vec<SystemHealthRow>, StoreError>;
    /// 列出最近的活动日志，最新的在前
    async fn list_recent_activity(&self, limit: u32) -> Result<Vec<ActivityLog>, StoreError>;
}
