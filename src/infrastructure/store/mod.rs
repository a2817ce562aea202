// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::StoreSettings;
use crate::domain::repositories::privileged_store::PrivilegedStore;
use crate::domain::repositories::restricted_store::RestrictedStore;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

pub mod privileged_impl;
pub mod rest_client;
pub mod restricted_impl;

use privileged_impl::PrivilegedStoreImpl;
use rest_client::RestClient;
use restricted_impl::RestrictedStoreImpl;

/// 存储句柄集合
///
/// 两级权限的存储接口作为显式依赖注入到各个路由。
/// 凭据缺失时对应句柄为None，路由据此降级：读取返回
/// 空结果，写入返回服务不可用。
#[derive(Clone, Default)]
pub struct Stores {
    restricted: Option<Arc<dyn RestrictedStore>>,
    privileged: Option<Arc<dyn PrivilegedStore>>,
}

impl Stores {
    /// 根据配置创建存储句柄集合
    ///
    /// 三个配置值全部有效时才创建受限客户端，服务密钥
    /// 另外存在时才创建特权客户端
    pub fn connect(settings: &StoreSettings, timeout: Duration) -> Self {
        if !has_valid_credentials(settings) {
            warn!("Store credentials missing or placeholder, running unconfigured");
            return Self::default();
        }

        let restricted = RestClient::new(&settings.url, settings.anon_key.clone(), timeout)
            .map(|client| Arc::new(RestrictedStoreImpl::new(client)) as Arc<dyn RestrictedStore>);

        let privileged = if settings.service_key.is_empty() {
            None
        } else {
            RestClient::new(&settings.url, settings.service_key.clone(), timeout)
                .map(|client| {
                    Arc::new(PrivilegedStoreImpl::new(client)) as Arc<dyn PrivilegedStore>
                })
                .ok()
        };

        match restricted {
            Ok(restricted) => {
                info!("Store client initialized");
                Self {
                    restricted: Some(restricted),
                    privileged,
                }
            }
            Err(e) => {
                warn!("Failed to build store client: {}", e);
                Self::default()
            }
        }
    }

    /// 创建未配置的存储句柄集合
    pub fn unconfigured() -> Self {
        Self::default()
    }

    /// 从现成的实现组装存储句柄集合（测试注入用）
    pub fn from_parts(
        restricted: Option<Arc<dyn RestrictedStore>>,
        privileged: Option<Arc<dyn PrivilegedStore>>,
    ) -> Self {
        Self {
            restricted,
            privileged,
        }
    }

    /// 获取受限存储句柄
    pub fn restricted(&self) -> Option<Arc<dyn RestrictedStore>> {
        self.restricted.clone()
    }

    /// 获取特权存储句柄
    pub fn privileged(&self) -> Option<Arc<dyn PrivilegedStore>> {
        self.privileged.clone()
    }
}

/// 校验存储凭据是否有效
///
/// URL必须是格式良好的http(s)地址，密钥非空，
/// 且两者都不是脚手架占位值
fn has_valid_credentials(settings: &StoreSettings) -> bool {
    if settings.url.is_empty() || settings.anon_key.is_empty() {
        return false;
    }
    if settings.url.starts_with("your-") || settings.anon_key.starts_with("your-") {
        return false;
    }
    Url::parse(&settings.url)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}
