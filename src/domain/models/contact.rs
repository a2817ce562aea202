// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;

/// 联系表单提交
///
/// 已通过校验的提交内容，插入后不再有后续生命周期
#[derive(Debug, Clone, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}
