// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 工作器类别枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkerCategory {
    /// 自动化
    Automation,
    /// 监控
    Monitoring,
    /// 营销
    Marketing,
    /// 分析
    Analytics,
}

/// 工作器注册表条目
///
/// 舰队中一个具名的外部自动化工作器的静态描述。
/// 探测结果总是以注册表为准展开，外部API只提供存活证据。
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WorkerSpec {
    /// 工作器标识符，与外部API中的脚本ID一致
    pub id: &'static str,
    /// 显示名称
    pub name: &'static str,
    /// 功能描述
    pub description: &'static str,
    /// 类别
    pub category: WorkerCategory,
    /// 图标
    pub icon: &'static str,
    /// 调度描述（可选）
    pub schedule: Option<&'static str>,
}

/// 工作器舰队注册表
pub const REGISTRY: &[WorkerSpec] = &[
    WorkerSpec {
        id: "uptime-sentinel",
        name: "Uptime Sentinel",
        description: "Monitors every worker and service for uptime, alerts on failures.",
        category: WorkerCategory::Monitoring,
        icon: "🫀",
        schedule: Some("Every 5 minutes"),
    },
    WorkerSpec {
        id: "morning-digest",
        name: "Morning Digest",
        description: "Compiles daily business metrics and delivers a morning briefing.",
        category: WorkerCategory::Analytics,
        icon: "📊",
        schedule: Some("Daily at 7am"),
    },
    WorkerSpec {
        id: "rank-tracker",
        name: "Rank Tracker",
        description: "Tracks store rankings and keyword positions for all published apps.",
        category: WorkerCategory::Monitoring,
        icon: "📱",
        schedule: Some("Every 6 hours"),
    },
    WorkerSpec {
        id: "index-submitter",
        name: "Index Submitter",
        description: "Submits new pages for search indexing and monitors crawl status.",
        category: WorkerCategory::Marketing,
        icon: "🔍",
        schedule: Some("On new content"),
    },
    WorkerSpec {
        id: "social-scheduler",
        name: "Social Scheduler",
        description: "Schedules and posts social content for brand accounts.",
        category: WorkerCategory::Automation,
        icon: "📸",
        schedule: Some("7am / 11am / 5pm"),
    },
    WorkerSpec {
        id: "metrics-rollup",
        name: "Metrics Rollup",
        description: "Aggregates analytics from multiple sources into weekly reports.",
        category: WorkerCategory::Analytics,
        icon: "📈",
        schedule: Some("Weekly"),
    },
    WorkerSpec {
        id: "brand-publisher",
        name: "Brand Publisher",
        description: "Content-calendar driven posting for a dedicated brand account.",
        category: WorkerCategory::Marketing,
        icon: "🐇",
        schedule: Some("7am / 11am / 5pm"),
    },
    WorkerSpec {
        id: "task-relay",
        name: "Task Relay",
        description: "Personal automation worker handling custom tasks and integrations.",
        category: WorkerCategory::Automation,
        icon: "☁️",
        schedule: Some("On demand"),
    },
];

/// 工作器健康状态枚举
///
/// `Error` 是一个合法的可观测状态而非传输故障，
/// 探测失败时所有注册表条目都会被标记为该状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkerStatus {
    /// 活跃，在外部API中存在对应脚本
    Active,
    /// 错误，探测请求失败
    Error,
    /// 未知，未配置凭据或脚本不存在
    Unknown,
}

impl fmt::Display for WorkerStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WorkerStatus::Active => write!(f, "active"),
            WorkerStatus::Error => write!(f, "error"),
            WorkerStatus::Unknown => write!(f, "unknown"),
        }
    }
}

/// 工作器健康快照
///
/// 每次探测时从注册表和外部数据合并重新计算，不持久化
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerHealth {
    /// 工作器标识符
    pub id: String,
    /// 显示名称
    pub name: String,
    /// 健康状态
    pub status: WorkerStatus,
    /// 外部记录的最后修改时间
    pub modified_on: Option<DateTime<Utc>>,
}
