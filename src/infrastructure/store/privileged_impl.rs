// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::activity::ActivityLog;
use crate::domain::models::contact::ContactSubmission;
use crate::domain::repositories::privileged_store::PrivilegedStore;
use crate::domain::repositories::restricted_store::StoreError;
use crate::infrastructure::store::rest_client::RestClient;
use async_trait::async_trait;

/// 特权存储实现
///
/// 基于服务密钥REST客户端实现，绕过行级授权
#[derive(Debug, Clone)]
pub struct PrivilegedStoreImpl {
    client: RestClient,
}

impl PrivilegedStoreImpl {
    /// 创建新的特权存储实例
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PrivilegedStore for PrivilegedStoreImpl {
    async fn list_activity_unrestricted(
        &self,
        limit: u32,
    ) -> Result<Vec<ActivityLog>, StoreError> {
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

    async fn insert_contact(&self, submission: &ContactSubmission) -> Result<(), StoreError> {
        self.client
            .insert_minimal("contact_submissions", submission)
            .await
    }
}
