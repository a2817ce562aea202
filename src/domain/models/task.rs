// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::models::brand::Brand;

/// 流水线任务实体
///
/// 表示构建队列中的一个工作项，归属于某个品牌，
/// 具有优先级、状态、标签和完成时间戳等属性。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// 任务唯一标识符
    pub id: Uuid,
    /// 所属品牌ID
    pub brand_id: Uuid,
    /// 任务标题
    pub title: String,
    /// 任务描述（可选）
    pub description: Option<String>,
    /// 任务优先级，数值越大排序越靠前
    pub priority: i32,
    /// 任务状态
    pub status: TaskStatus,
    /// 自由文本标签集合
    #[serde(default)]
    pub tags: Vec<String>,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 更新时间，每次修改时由存储层自动更新
    pub updated_at: DateTime<Utc>,
    /// 完成时间，状态变为completed的瞬间由存储层写入，之后不会被清除
    pub completed_at: Option<DateTime<Utc>>,
    /// 嵌入的品牌信息（读侧联表结果）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brands: Option<Brand>,
}

/// 任务状态枚举
///
/// 状态之间没有强制的转换图，任何状态都可以被直接设置为
/// 任何其他状态，业务上的合法转换由操作者自行判断。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// 已入队，任务已创建但尚未开始
    #[default]
    Queued,
    /// 进行中
    InProgress,
    /// 已阻塞，等待外部条件
    Blocked,
    /// 已完成
    Completed,
    /// 已取消
    Cancelled,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TaskStatus::Queued => write!(f, "queued"),
            TaskStatus::InProgress => write!(f, "in_progress"),
            TaskStatus::Blocked => write!(f, "blocked"),
            TaskStatus::Completed => write!(f, "completed"),
            TaskStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl FromStr for TaskStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "queued" => Ok(TaskStatus::Queued),
            "in_progress" => Ok(TaskStatus::InProgress),
            "blocked" => Ok(TaskStatus::Blocked),
            "completed" => Ok(TaskStatus::Completed),
            "cancelled" => Ok(TaskStatus::Cancelled),
            _ => Err(()),
        }
    }
}

/// 新任务的输入字段
///
/// 未指定的字段使用固定默认值：状态queued、优先级0、标签为空
#[derive(Debug, Clone, Serialize)]
pub struct NewTask {
    pub brand_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub priority: i32,
    pub status: TaskStatus,
    pub tags: Vec<String>,
}

impl NewTask {
    /// 创建一个带默认值的新任务
    pub fn new(brand_id: Uuid, title: String) -> Self {
        Self {
            brand_id,
            title,
            description: None,
            priority: 0,
            status: TaskStatus::Queued,
            tags: Vec::new(),
        }
    }
}

/// 任务部分更新
///
/// 仅允许修改 status/title/description/priority/tags 五个字段，
/// 其余字段在请求反序列化阶段即被丢弃。状态只能通过
/// [`TaskPatch::set_status`] 进入补丁，作为唯一入口点。
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    status: Option<TaskStatus>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<i32>,
    pub tags: Option<Vec<String>>,
}

impl TaskPatch {
    /// 设置目标状态
    ///
    /// 不做任何转换校验，completed -> queued 等逆向转换同样被接受
    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = Some(status);
    }

    /// 读取补丁中的目标状态
    pub fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// 判断补丁是否为空
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.tags.is_none()
    }
}
