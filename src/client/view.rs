// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::brand::Brand;
use crate::domain::models::task::Task;
use crate::domain::models::worker::{WorkerHealth, WorkerStatus};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use uuid::Uuid;

/// 按品牌分组后的任务
#[derive(Debug, Clone)]
pub struct BrandGroup {
    /// 品牌信息，任务未内嵌品牌时为None
    pub brand: Option<Brand>,
    /// 该品牌下的任务，保持服务端的排序
    pub tasks: Vec<Task>,
}

/// 将任务按品牌分组
///
/// 纯客户端聚合，不改变服务端状态。分组顺序遵循任务
/// 列表中品牌的首次出现顺序，组内保持原有排序。
pub fn group_by_brand(tasks: &[Task]) -> Vec<BrandGroup> {
    let mut order: Vec<Uuid> = Vec::new();
    let mut groups: HashMap<Uuid, BrandGroup> = HashMap::new();

    for task in tasks {
        let entry = groups.entry(task.brand_id).or_insert_with(|| {
            order.push(task.brand_id);
            BrandGroup {
                brand: task.brands.clone(),
                tasks: Vec::new(),
            }
        });
        entry.tasks.push(task.clone());
    }

    order
        .into_iter()
        .filter_map(|brand_id| groups.remove(&brand_id))
        .collect()
}

/// 舰队状态统计
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FleetCounts {
    pub total: usize,
    pub active: usize,
    pub error: usize,
    pub unknown: usize,
}

/// 统计舰队中各状态的工作器数量
pub fn fleet_counts(workers: &[WorkerHealth]) -> FleetCounts {
    let mut counts = FleetCounts {
        total: workers.len(),
        ..FleetCounts::default()
    };
    for worker in workers {
        match worker.status {
            WorkerStatus::Active => counts.active += 1,
            WorkerStatus::Error => counts.error += 1,
            WorkerStatus::Unknown => counts.unknown += 1,
        }
    }
    counts
}

/// 渲染相对时间
///
/// 与仪表盘活动流的展示粒度一致：一分钟内为"just now"，
/// 之后按分钟、小时、天递进
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let secs = elapsed.num_seconds();
    if secs < 60 {
        return "just now".to_string();
    }
    let mins = elapsed.num_minutes();
    if mins < 60 {
        return format!("{}m ago", mins);
    }
    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("{}h ago", hours);
    }
    format!("{}d ago", elapsed.num_days())
}
