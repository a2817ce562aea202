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

use crate::domain::repositories::restricted_store::StoreError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// REST存储客户端
///
/// 针对PostgREST风格端点的轻量封装，每个权限级别持有
/// 一个实例，仅在API密钥上有所区别。
#[derive(Debug, Clone)]
pub struct RestClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestClient {
    /// 创建新的REST存储客户端
    ///
    /// # 参数
    ///
    /// * `base_url` - 存储端点URL
    /// * `api_key` - 该权限级别使用的API密钥
    /// * `timeout` - 出站请求超时时间
    pub fn new(base_url: &str, api_key: String, timeout: Duration) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, StoreError> {
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                message: extract_message(&text),
            });
        }
        Ok(serde_json::from_str(&text)?)
    }

    async fn check(response: reqwest::Response) -> Result<(), StoreError> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                message: extract_message(&text),
            });
        }
        Ok(())
    }

    /// 查询表中的行
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, StoreError> {
        let response = self
            .authed(self.client.get(self.table_url(table)).query(query))
            .send()
            .await?;
        Self::decode(response).await
    }

    /// 插入一行并返回其表示
    pub async fn insert<T: DeserializeOwned>(
        &self,
        table: &str,
        body: &impl Serialize,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, StoreError> {
        let response = self
            .authed(self.client.post(self.table_url(table)).query(query))
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// 插入一行，不要求返回表示
    pub async fn insert_minimal(
        &self,
        table: &str,
        body: &impl Serialize,
    ) -> Result<(), StoreError> {
        let response = self
            .authed(self.client.post(self.table_url(table)))
            .header("Prefer", "return=minimal")
            .json(body)
            .send()
            .await?;
        Self::check(response).await
    }

    /// 更新匹配的行并返回其表示
    pub async fn update<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
        body: &impl Serialize,
    ) -> Result<Vec<T>, StoreError> {
        let response = self
            .authed(self.client.patch(self.table_url(table)).query(query))
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// 删除匹配的行
    pub async fn delete(&self, table: &str, query: &[(&str, String)]) -> Result<(), StoreError> {
        let response = self
            .authed(self.client.delete(self.table_url(table)).query(query))
            .send()
            .await?;
        Self::check(response).await
    }
}

/// 从错误响应体中提取可读消息
///
/// 存储返回 `{"message": "..."}` 结构时取其message字段，
/// 否则原样返回响应体
fn extract_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_else(|| body.to_string())
}
