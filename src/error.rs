//! 应用程序错误类型
//!
//! 错误分类在 LLM 客户端处完成，服务层负责把全部错误就地吸收并
//! 转换为兜底数据——调用方只会拿到值，不会拿到错误。

use thiserror::Error;

/// LLM 调用错误
///
/// 限流不再靠字符串里找 "429"：客户端在分类阶段识别限流信号，
/// 之后整个代码库只检查 `RateLimited` 这一结构化变体。
#[derive(Debug, Error)]
pub enum LlmError {
    /// 请求频率限制（需要立即走兜底，不再重试）
    #[error("LLM 请求被限流 (模型: {model})")]
    RateLimited {
        /// 模型名称
        model: String,
    },

    /// API 调用失败（网络或远端错误）
    #[error("LLM API 调用失败 (模型: {model}): {source}")]
    ApiCallFailed {
        /// 模型名称
        model: String,
        /// 底层错误
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// 返回内容为空
    #[error("LLM 返回内容为空 (模型: {model})")]
    EmptyContent {
        /// 模型名称
        model: String,
    },

    /// 结构化列表解码失败
    #[error("车辆列表解码失败: {reason}")]
    MalformedListing {
        /// 失败原因
        reason: String,
    },
}

impl LlmError {
    /// 是否为限流错误（限流时跳过剩余重试，直接返回兜底数据）
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, LlmError::RateLimited { .. })
    }
}

/// 应用程序结果类型
pub type LlmResult<T> = Result<T, LlmError>;
