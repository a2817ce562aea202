// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// PIN认证请求
#[derive(Debug, Deserialize, Serialize)]
pub struct PinRequestDto {
    pub pin: Option<String>,
}
