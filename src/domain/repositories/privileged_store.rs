// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::activity::ActivityLog;
use crate::domain::models::contact::ContactSubmission;
use crate::domain::repositories::restricted_store::StoreError;
use async_trait::async_trait;

/// 特权存储特质
///
/// 使用服务密钥的数据访问接口，绕过行级授权。
/// 实践中只用于舰队活动日志读取和联系表单写入，
/// 注入时作为显式依赖与受限接口分开传递。
#[async_trait]
pub trait PrivilegedStore: Send + Sync {
    /// 以完整可见性列出活动日志，最新的在前
    async fn list_activity_unrestricted(&self, limit: u32)
        -> Result<Vec<ActivityLog>, StoreError>;
    /// 插入联系表单提交
    async fn insert_contact(&self, submission: &ContactSubmission) -> Result<(), StoreError>;
}
