// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::{header, HeaderMap};

/// 会话Cookie名称
pub const SESSION_COOKIE: &str = "dashboard_session";

/// 会话Cookie的哨兵值
///
/// 会话完全由该Cookie的存在与取值表示，服务端不持久化
/// 任何会话状态
pub const SESSION_SENTINEL: &str = "authenticated";

/// 会话Cookie的绝对生存期（24小时）
const SESSION_MAX_AGE_SECS: u64 = 86_400;

/// 判断Cookie值是否为有效会话
///
/// 仅当取值与哨兵完全一致时通过，空字符串和大小写
/// 变体都会被拒绝
pub fn is_authenticated(cookie_value: Option<&str>) -> bool {
    cookie_value == Some(SESSION_SENTINEL)
}

/// 校验PIN码
///
/// 配置的PIN为空时直接失败（缺少配置是认证失败，
/// 而不是敞开大门）；否则要求完全相等
pub fn verify_pin(supplied: &str, configured: &str) -> bool {
    !configured.is_empty() && supplied == configured
}

/// 从请求头中提取会话Cookie的值
pub fn session_cookie_value(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

/// 构造签发会话的Set-Cookie值
///
/// HttpOnly、SameSite=Strict、根路径、24小时生存期，
/// 生产模式下附加Secure
pub fn issue_cookie(production: bool) -> String {
    format!(
        "{}={}; Max-Age={}; Path=/; HttpOnly; SameSite=Strict{}",
        SESSION_COOKIE,
        SESSION_SENTINEL,
        SESSION_MAX_AGE_SECS,
        if production { "; Secure" } else { "" }
    )
}

/// 构造清除会话的Set-Cookie值
pub fn clear_cookie(production: bool) -> String {
    format!(
        "{}=; Max-Age=0; Path=/; HttpOnly; SameSite=Strict{}",
        SESSION_COOKIE,
        if production { "; Secure" } else { "" }
    )
}
