//! LLM API 客户端
//!
//! 封装所有与 LLM API 相关的调用逻辑
//!
//! ## 技术栈
//! - 使用 `async-openai` crate 进行 API 调用
//! - 支持自定义 API 端点和模型
//! - 兼容 OpenAI API 的服务（如 Gemini 的 OpenAI 兼容端点）

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use tracing::{debug, warn};

use crate::clients::generator::TextGenerator;
use crate::config::Config;
use crate::error::{LlmError, LlmResult};

/// LLM 客户端
pub struct LlmClient {
    client: Client<OpenAIConfig>,
    model_name: String,
}

impl LlmClient {
    /// 创建新的 LLM 客户端
    pub fn new(config: &Config) -> Self {
        // 配置 OpenAI 客户端（兼容 OpenAI API 的服务）
        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.llm_api_key)
            .with_api_base(&config.llm_api_base_url);

        let client = Client::with_config(openai_config);

        Self {
            client,
            model_name: config.llm_model_name.clone(),
        }
    }

    /// 创建自定义模型的 LLM 客户端
    pub fn with_model(config: &Config, model_name: impl Into<String>) -> Self {
        let mut client = Self::new(config);
        client.model_name = model_name.into();
        client
    }

    /// 发送聊天请求
    ///
    /// # 参数
    /// - `user_message`: 用户消息内容
    /// - `system_message`: 系统消息（可选）
    ///
    /// # 返回
    /// 返回 LLM 的响应内容；失败时返回分类后的 `LlmError`
    pub async fn chat(
        &self,
        user_message: &str,
        system_message: Option<&str>,
    ) -> LlmResult<String> {
        debug!("调用 LLM API，模型: {}", self.model_name);
        debug!("用户消息长度: {} 字符", user_message.len());

        // 构建消息列表
        let mut messages = Vec::new();

        // 添加系统消息（如果提供）
        if let Some(sys_msg) = system_message {
            let system_msg = ChatCompletionRequestSystemMessageArgs::default()
                .content(sys_msg)
                .build()
                .map_err(|e| self.classify(e))?;
            messages.push(ChatCompletionRequestMessage::System(system_msg));
        }

        // 添加用户消息
        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(user_message)
            .build()
            .map_err(|e| self.classify(e))?;
        messages.push(ChatCompletionRequestMessage::User(user_msg));

        // 构建请求
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(messages)
            .temperature(0.3)
            .max_tokens(1024u32)
            .build()
            .map_err(|e| self.classify(e))?;

        // 调用 API
        let response = self.client.chat().create(request).await.map_err(|e| {
            warn!("LLM API 调用失败: {}", e);
            self.classify(e)
        })?;

        debug!("LLM API 调用成功");

        // 提取响应内容
        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| LlmError::EmptyContent {
                model: self.model_name.clone(),
            })?;

        let content = content.trim().to_string();
        if content.is_empty() {
            return Err(LlmError::EmptyContent {
                model: self.model_name.clone(),
            });
        }

        Ok(content)
    }

    /// 把底层错误分类为结构化的 `LlmError`
    ///
    /// 限流信号的识别（HTTP 429 / "rate limit" 字样）只发生在这里，
    /// 其余代码一律检查 `LlmError::RateLimited`，不再做字符串匹配
    fn classify(&self, err: impl std::error::Error + Send + Sync + 'static) -> LlmError {
        if is_rate_limit_signal(&err.to_string()) {
            return LlmError::RateLimited {
                model: self.model_name.clone(),
            };
        }
        LlmError::ApiCallFailed {
            model: self.model_name.clone(),
            source: Box::new(err),
        }
    }
}

/// 判断错误消息是否携带限流信号
fn is_rate_limit_signal(message: &str) -> bool {
    let lowered = message.to_lowercase();
    message.contains("429")
        || lowered.contains("rate limit")
        || lowered.contains("too many requests")
        || lowered.contains("resource exhausted")
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn generate(&self, prompt: &str) -> LlmResult<String> {
        self.chat(prompt, None).await
    }
}
