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

use crate::client::api_client::{DashboardClient, PipelineData};
use crate::domain::models::activity::ActivityLog;
use crate::domain::models::worker::WorkerHealth;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// 舰队视图的刷新间隔
pub const FLEET_POLL_INTERVAL: Duration = Duration::from_secs(60);

/// 任务流水线视图的刷新间隔
pub const PIPELINE_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// 舰队视图的内存快照
#[derive(Debug, Clone, Default)]
pub struct FleetSnapshot {
    pub workers: Vec<WorkerHealth>,
    pub logs: Vec<ActivityLog>,
}

/// 舰队轮询器
///
/// 每个刷新周期并发拉取健康与活动两路数据，成功的一路
/// 整体替换对应状态，失败的一路保留既有数据（陈旧但在场）。
/// 周期之间不互斥，重叠的在途请求是良性竞争，最后完成的
/// 响应胜出。
pub struct FleetPoller {
    api: Arc<DashboardClient>,
    state: Arc<RwLock<FleetSnapshot>>,
    interval: Duration,
    handle: Option<JoinHandle<()>>,
}

impl FleetPoller {
    /// 创建新的舰队轮询器（默认60秒间隔）
    pub fn new(api: Arc<DashboardClient>) -> Self {
        Self::with_interval(api, FLEET_POLL_INTERVAL)
    }

    /// 创建指定间隔的舰队轮询器
    pub fn with_interval(api: Arc<DashboardClient>, interval: Duration) -> Self {
        Self {
            api,
            state: Arc::new(RwLock::new(FleetSnapshot::default())),
            interval,
            handle: None,
        }
    }

    /// 读取当前快照
    pub fn snapshot(&self) -> FleetSnapshot {
        self.state.read().clone()
    }

    /// 立即执行一次刷新
    pub async fn refresh_once(&self) {
        refresh_fleet(&self.api, &self.state).await;
    }

    /// 启动轮询循环
    ///
    /// 首个周期立即触发，与原始视图挂载即拉取的行为一致
    pub fn start(&mut self) {
        if self.handle.is_some() {
            return;
        }
        let api = self.api.clone();
        let state = self.state.clone();
        let interval = self.interval;
        info!("Fleet poller started ({}s interval)", interval.as_secs());
        self.handle = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                refresh_fleet(&api, &state).await;
            }
        }));
    }

    /// 停止轮询循环
    ///
    /// 在途响应在中止后到达时被直接丢弃
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for FleetPoller {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn refresh_fleet(api: &DashboardClient, state: &RwLock<FleetSnapshot>) {
    let (health, activity) = tokio::join!(api.fetch_worker_health(), api.fetch_worker_activity());

    match health {
        Ok(workers) => state.write().workers = workers,
        Err(e) => warn!("Fleet health refresh failed, keeping previous data: {}", e),
    }
    match activity {
        Ok(logs) => state.write().logs = logs,
        Err(e) => warn!("Fleet activity refresh failed, keeping previous data: {}", e),
    }
}

/// 任务流水线轮询器
///
/// 任务与品牌由服务端作为一对查询返回，整个快照在成功时
/// 整体替换，失败时保持不变
pub struct PipelinePoller {
    api: Arc<DashboardClient>,
    state: Arc<RwLock<PipelineData>>,
    interval: Duration,
    handle: Option<JoinHandle<()>>,
}

impl PipelinePoller {
    /// 创建新的流水线轮询器（默认30秒间隔）
    pub fn new(api: Arc<DashboardClient>) -> Self {
        Self::with_interval(api, PIPELINE_POLL_INTERVAL)
    }

    /// 创建指定间隔的流水线轮询器
    pub fn with_interval(api: Arc<DashboardClient>, interval: Duration) -> Self {
        Self {
            api,
            state: Arc::new(RwLock::new(PipelineData::default())),
            interval,
            handle: None,
        }
    }

    /// 读取当前快照
    pub fn snapshot(&self) -> PipelineData {
        self.state.read().clone()
    }

    /// 立即执行一次刷新
    pub async fn refresh_once(&self) {
        refresh_pipeline(&self.api, &self.state).await;
    }

    /// 启动轮询循环
    pub fn start(&mut self) {
        if self.handle.is_some() {
            return;
        }
        let api = self.api.clone();
        let state = self.state.clone();
        let interval = self.interval;
        info!("Pipeline poller started ({}s interval)", interval.as_secs());
        self.handle = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                refresh_pipeline(&api, &state).await;
            }
        }));
    }

    /// 停止轮询循环
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for PipelinePoller {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn refresh_pipeline(api: &DashboardClient, state: &RwLock<PipelineData>) {
    match api.fetch_pipeline().await {
        Ok(data) => *state.write() = data,
        Err(e) => warn!("Pipeline refresh failed, keeping previous data: {}", e),
    }
}
