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

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::debug;

use crate::presentation::errors::ApiError;
use crate::presentation::session;

/// 会话中间件
///
/// 在处理器之前校验会话Cookie；失败时立即返回401，
/// 不触达存储也不发起任何网络访问
///
/// # 参数
///
/// * `req` - HTTP请求
/// * `next` - 下一个中间件
///
/// # 返回值
///
/// * `Ok(Response)` - 会话有效，继续处理
/// * `Err(ApiError)` - 会话缺失或无效
pub async fn session_middleware(req: Request, next: Next) -> Result<Response, ApiError> {
    let cookie = session::session_cookie_value(req.headers());
    if !session::is_authenticated(cookie.as_deref()) {
        debug!("Rejected unauthenticated request to {}", req.uri().path());
        return Err(ApiError::Unauthorized);
    }
    Ok(next.run(req).await)
}
