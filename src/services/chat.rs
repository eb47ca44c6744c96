//! 聊天服务 - 业务能力层
//!
//! 只负责"自由问答"能力：单次尝试，不重试，失败返回固定致歉文案。
//! 聊天历史记录在会话上下文中，由调用方持有。

use tracing::{info, warn};

use crate::clients::TextGenerator;
use crate::models::ChatRole;
use crate::utils::logging::truncate_text;
use crate::workflow::SessionCtx;

/// 自由问答失败时的固定回复
const FALLBACK_REPLY: &str = "I'm not sure about that.";

/// 聊天服务
pub struct ChatService<G> {
    generator: G,
}

impl<G: TextGenerator> ChatService<G> {
    /// 创建新的聊天服务
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// 处理一条用户提问
    ///
    /// 用户消息与助手回复都会追加到会话聊天历史
    ///
    /// # 参数
    /// - `session`: 会话上下文（持有聊天历史）
    /// - `query`: 用户提问
    ///
    /// # 返回
    /// 返回助手回复文本，绝不失败
    pub async fn ask(&self, session: &mut SessionCtx, query: &str) -> String {
        info!("🤖 用户提问: {}", truncate_text(query, 80));
        session.push_chat(ChatRole::User, query);

        let reply = match self.generator.generate(query).await {
            Ok(text) => text,
            Err(e) => {
                warn!("⚠️ 问答请求失败: {}", e);
                FALLBACK_REPLY.to_string()
            }
        };

        session.push_chat(ChatRole::Assistant, reply.clone());
        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LlmError, LlmResult};
    use async_trait::async_trait;

    enum FixedGenerator {
        Reply(String),
        Fail,
    }

    #[async_trait]
    impl TextGenerator for FixedGenerator {
        async fn generate(&self, _prompt: &str) -> LlmResult<String> {
            match self {
                FixedGenerator::Reply(text) => Ok(text.clone()),
                FixedGenerator::Fail => Err(LlmError::EmptyContent {
                    model: "fixed".to_string(),
                }),
            }
        }
    }

    #[tokio::test]
    async fn test_reply_recorded_in_history() {
        let service = ChatService::new(FixedGenerator::Reply("EVs use electric motors.".into()));
        let mut session = SessionCtx::new();

        let reply = service.ask(&mut session, "How do EVs work?").await;

        assert_eq!(reply, "EVs use electric motors.");
        assert_eq!(session.chat_history.len(), 2);
        assert_eq!(session.chat_history[0].role, ChatRole::User);
        assert_eq!(session.chat_history[1].content, "EVs use electric motors.");
    }

    #[tokio::test]
    async fn test_failure_yields_fixed_reply() {
        let service = ChatService::new(FixedGenerator::Fail);
        let mut session = SessionCtx::new();

        let reply = service.ask(&mut session, "Anything?").await;

        assert_eq!(reply, "I'm not sure about that.");
        // 失败的回复同样进入历史
        assert_eq!(session.chat_history.len(), 2);
    }
}
