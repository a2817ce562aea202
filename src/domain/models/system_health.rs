// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 服务健康状态枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    /// 健康
    Healthy,
    /// 降级
    Degraded,
    /// 宕机
    Down,
    /// 未知
    Unknown,
}

/// 系统健康记录
///
/// 工作器健康快照的持久化形式，以服务名为键，
/// 由外部工作器自行更新，本核心只读。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemHealthRow {
    /// 记录唯一标识符
    pub id: Uuid,
    /// 服务名称（排序键）
    pub service_name: String,
    /// 当前健康状态
    pub status: ServiceStatus,
    /// 最近一次检查时间
    pub last_check_at: Option<DateTime<Utc>>,
    /// 最近一次健康时间
    pub last_healthy_at: Option<DateTime<Utc>>,
    /// 元数据（图标、调度、描述等）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}
