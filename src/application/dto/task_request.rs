// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::task::{NewTask, TaskPatch, TaskStatus};

/// 任务列表查询参数
///
/// `status` 为逗号分隔的状态列表，`brand_id` 为品牌过滤，
/// 两者都是可选的独立谓词
#[derive(Debug, Default, Deserialize)]
pub struct TaskListQuery {
    pub status: Option<String>,
    pub brand_id: Option<Uuid>,
}

impl TaskListQuery {
    /// 解析逗号分隔的状态列表
    ///
    /// 无法识别的状态值会被静默丢弃（它们不可能匹配任何任务）
    pub fn statuses(&self) -> Vec<TaskStatus> {
        self.status
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .filter_map(|s| s.trim().parse().ok())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// 创建任务请求
///
/// `brand_id` 与 `title` 必填，在处理器中显式校验以便返回400
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateTaskDto {
    pub brand_id: Option<Uuid>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<i32>,
    pub tags: Option<Vec<String>>,
}

impl CreateTaskDto {
    /// 转换为领域层的新任务，应用默认值
    ///
    /// # 返回值
    ///
    /// * `Some(NewTask)` - 必填字段齐全
    /// * `None` - 缺少 brand_id 或 title
    pub fn into_new_task(self) -> Option<NewTask> {
        let brand_id = self.brand_id?;
        let title = self.title.filter(|t| !t.is_empty())?;
        let mut task = NewTask::new(brand_id, title);
        task.description = self.description;
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(tags) = self.tags {
            task.tags = tags;
        }
        Some(task)
    }
}

/// 更新任务请求
///
/// 只反序列化允许修改的五个字段，请求体中的其他字段
/// （例如 brand_id）被静默忽略而不是拒绝
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateTaskDto {
    pub status: Option<TaskStatus>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<i32>,
    pub tags: Option<Vec<String>>,
}

impl From<UpdateTaskDto> for TaskPatch {
    fn from(dto: UpdateTaskDto) -> Self {
        let mut patch = TaskPatch::default();
        patch.title = dto.title;
        patch.description = dto.description;
        patch.priority = dto.priority;
        patch.tags = dto.tags;
        if let Some(status) = dto.status {
            patch.set_status(status);
        }
        patch
    }
}
