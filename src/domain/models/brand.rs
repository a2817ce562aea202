// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 品牌实体
///
/// 拥有一组任务的租户分组。本核心只读取品牌，
/// 创建任务时仅提供活跃品牌作为归属目标。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    /// 品牌唯一标识符
    pub id: Uuid,
    /// 显示名称
    pub name: String,
    /// URL友好的短名称
    pub slug: String,
}
