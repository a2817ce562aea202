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

use crate::infrastructure::cache::doc_cache::DocCache;
use metrics::counter;
use reqwest::header;
use std::time::Duration;
use tracing::warn;

/// 所有来源都失败时返回的固定回退文本
pub const FALLBACK_DOC: &str =
    "# Operations Playbook\n\nUnable to fetch from any configured source. Check repository access.";

/// 远程文档的缓存TTL
const DOC_TTL: Duration = Duration::from_secs(5 * 60);

/// 远程文档拉取器
///
/// 按顺序尝试候选来源，接受第一个成功响应并写入单槽缓存。
/// 整体失败解析为固定回退文本，不会污染缓存。
pub struct DocFetcher {
    client: reqwest::Client,
    sources: Vec<String>,
    cache: DocCache,
}

impl DocFetcher {
    /// 创建新的文档拉取器
    ///
    /// # 参数
    ///
    /// * `sources` - 候选来源URL列表，按顺序尝试
    /// * `timeout` - 单个来源的请求超时时间
    pub fn new(sources: Vec<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            sources,
            cache: DocCache::new(DOC_TTL),
        })
    }

    /// 获取文档内容
    ///
    /// # 返回值
    ///
    /// `(content, cache_hit)` - 命中缓存时不发生任何网络访问
    pub async fn fetch(&self) -> (String, bool) {
        if let Some(content) = self.cache.get() {
            counter!("doc_cache_hits_total").increment(1);
            return (content, true);
        }
        counter!("doc_cache_misses_total").increment(1);

        for source in &self.sources {
            match self.try_source(source).await {
                Ok(content) => {
                    self.cache.store(content.clone());
                    return (content, false);
                }
                Err(e) => {
                    warn!("Doc source {} failed: {}", source, e);
                    counter!("doc_source_failures_total").increment(1);
                }
            }
        }

        // Every source failed; the cache stays empty so the next call
        // retries real sources instead of serving the fallback from cache
        (FALLBACK_DOC.to_string(), false)
    }

    async fn try_source(&self, url: &str) -> Result<String, reqwest::Error> {
        let response = self
            .client
            .get(url)
            .header(header::USER_AGENT, "fleetrs-dashboard")
            .send()
            .await?
            .error_for_status()?;
        response.text().await
    }
}
