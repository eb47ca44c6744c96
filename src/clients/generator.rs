//! 文本生成边界
//!
//! 远端生成服务被视为不透明的"提示词进、文本出"能力。
//! 服务层只依赖该 trait，测试中用脚本化的假实现替换真实客户端。

use async_trait::async_trait;

use crate::error::LlmResult;

/// 文本生成能力
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// 发送提示词，返回远端生成的文本
    ///
    /// # 参数
    /// - `prompt`: 提示词内容
    ///
    /// # 返回
    /// 返回生成的文本（已去除两侧空白）；失败时返回分类后的 `LlmError`
    async fn generate(&self, prompt: &str) -> LlmResult<String>;
}

// 多个服务共享同一个客户端时直接传 Arc
#[async_trait]
impl<G: TextGenerator + ?Sized> TextGenerator for std::sync::Arc<G> {
    async fn generate(&self, prompt: &str) -> LlmResult<String> {
        (**self).generate(prompt).await
    }
}
