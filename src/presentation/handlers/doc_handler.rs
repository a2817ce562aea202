// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{extract::Extension, Json};
use serde_json::json;
use std::sync::Arc;

use crate::infrastructure::external::doc_fetcher::DocFetcher;

/// 远程配置文档处理器
///
/// 总是返回200：命中缓存、新拉取和整体回退都解析为
/// 正常响应，cached标志告知轮询端数据来源
pub async fn config_doc(Extension(fetcher): Extension<Arc<DocFetcher>>) -> Json<serde_json::Value> {
    let (content, cached) = fetcher.fetch().await;
    Json(json!({ "content": content, "cached": cached }))
}
