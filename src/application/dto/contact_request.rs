// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::contact::ContactSubmission;

/// 联系表单请求
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct ContactRequestDto {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 10, message = "Message must be at least 10 characters"))]
    pub message: String,
}

impl From<ContactRequestDto> for ContactSubmission {
    fn from(dto: ContactRequestDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            message: dto.message,
        }
    }
}
