// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 活动日志状态枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    /// 成功
    Success,
    /// 错误
    Error,
    /// 信息
    Info,
}

/// 工作器活动日志
///
/// 由外部工作器写入，本核心只按时间倒序读取。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityLog {
    /// 日志唯一标识符
    pub id: Uuid,
    /// 工作器标识符
    pub worker_id: String,
    /// 工作器显示名称
    pub worker_name: String,
    /// 动作描述
    pub action: String,
    /// 日志状态
    pub status: ActivityStatus,
    /// 自由格式的详情数据
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}
