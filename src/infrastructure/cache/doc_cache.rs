// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use parking_lot::RwLock;
use std::time::{Duration, Instant};

/// 单槽TTL文档缓存
///
/// 进程级共享，仅缓存一个逻辑资源。并发刷新采用
/// 最后写入者胜出语义，几秒的陈旧对内部工具可以接受，
/// 因此不做获取锁。失败从不写入槽位，下次调用会重新
/// 尝试真实来源。
pub struct DocCache {
    ttl: Duration,
    slot: RwLock<Option<Slot>>,
}

#[derive(Clone)]
struct Slot {
    content: String,
    fetched_at: Instant,
}

impl DocCache {
    /// 创建新的文档缓存
    ///
    /// # 参数
    ///
    /// * `ttl` - 缓存值的存活时间
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: RwLock::new(None),
        }
    }

    /// 获取未过期的缓存内容
    pub fn get(&self) -> Option<String> {
        self.get_at(Instant::now())
    }

    /// 在给定时间点获取未过期的缓存内容（测试可控时间）
    pub fn get_at(&self, now: Instant) -> Option<String> {
        let slot = self.slot.read();
        slot.as_ref().and_then(|cached| {
            if now.duration_since(cached.fetched_at) < self.ttl {
                Some(cached.content.clone())
            } else {
                None
            }
        })
    }

    /// 写入缓存内容
    pub fn store(&self, content: String) {
        self.store_at(content, Instant::now());
    }

    /// 在给定时间点写入缓存内容（测试可控时间）
    pub fn store_at(&self, content: String, now: Instant) {
        *self.slot.write() = Some(Slot {
            content,
            fetched_at: now,
        });
    }
}
