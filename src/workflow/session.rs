//! 会话上下文
//!
//! 封装一次用户会话期间的全部可变状态：列表缓存与聊天历史。
//! 状态通过 `&mut` 显式传入各处理器，不存在任何环境全局变量。

use std::collections::HashMap;

use crate::models::{ChatMessage, ChatRole, VehicleSummary};

/// 会话上下文
///
/// 职责：
/// - 持有列表查询的会话级缓存（键为五元组复合键）
/// - 持有聊天历史
/// - 缓存键在一个会话内至多写入一次（首次成功抓取胜出，无失效/过期）
#[derive(Debug, Default)]
pub struct SessionCtx {
    /// 列表查询缓存
    listing_cache: HashMap<String, Vec<VehicleSummary>>,
    /// 聊天历史
    pub chat_history: Vec<ChatMessage>,
}

impl SessionCtx {
    /// 创建新的会话上下文
    pub fn new() -> Self {
        Self::default()
    }

    /// 按复合键查询缓存
    pub fn cached_listing(&self, key: &str) -> Option<&[VehicleSummary]> {
        self.listing_cache.get(key).map(|v| v.as_slice())
    }

    /// 写入缓存（同键已存在时保留旧值）
    pub fn store_listing(&mut self, key: String, listing: Vec<VehicleSummary>) {
        self.listing_cache.entry(key).or_insert(listing);
    }

    /// 追加一条聊天消息
    pub fn push_chat(&mut self, role: ChatRole, content: impl Into<String>) {
        self.chat_history.push(ChatMessage {
            role,
            content: content.into(),
        });
    }

    /// 重置会话（清空缓存与聊天历史）
    pub fn reset(&mut self) {
        self.listing_cache.clear();
        self.chat_history.clear();
    }

    /// 当前缓存条目数（仅用于日志显示）
    pub fn cache_len(&self) -> usize {
        self.listing_cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FuelType;

    fn summary(name: &str) -> VehicleSummary {
        VehicleSummary {
            name: name.to_string(),
            price: "$30,000".to_string(),
            range: "N/A".to_string(),
            fuel: FuelType::NonElectric,
            horsepower: "200 HP".to_string(),
        }
    }

    #[test]
    fn test_first_write_wins() {
        let mut session = SessionCtx::new();
        session.store_listing("key".to_string(), vec![summary("First")]);
        session.store_listing("key".to_string(), vec![summary("Second")]);

        let cached = session.cached_listing("key").unwrap();
        assert_eq!(cached[0].name, "First");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = SessionCtx::new();
        session.store_listing("key".to_string(), vec![summary("First")]);
        session.push_chat(ChatRole::User, "hello");

        session.reset();

        assert!(session.cached_listing("key").is_none());
        assert!(session.chat_history.is_empty());
        assert_eq!(session.cache_len(), 0);
    }
}
