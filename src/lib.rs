//! # AutoSage
//!
//! AI 驱动的车辆探索与比较助手核心
//!
//! ## 架构设计
//!
//! 本系统采用严格的分层架构：
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 持有远端生成服务的访问能力
//! - `TextGenerator` - 不透明的"提示词进、文本出"边界
//! - `LlmClient` - async-openai 实现，负责错误分类（限流识别只发生在这里）
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，调用方永远拿到值、不会拿到错误
//! - `ExplorerService` - 列表查询能力（缓存 → 重试 → 确定性兜底）
//! - `VehicleInfoService` - 单车详情能力（单次尝试 + 兜底文本）
//! - `ComparisonService` / `compare` - 比较叙述 + 纯函数打分引擎
//! - `ChatService` - 自由问答能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义页面事件的完整处理流程，输出视图模型
//! - `SessionCtx` - 会话状态显式封装（列表缓存 + 聊天历史），无环境全局变量
//! - `ExploreFlow` / `CompareFlow` - 流程编排
//!
//! ### ④ 解析层（Parsing）
//! - `parsing/` - 把自由文本规范化为结构化记录
//! - `extract_numeric` - 数值提取（缺失显式表示为 None）
//! - `parse_detail` - 行式 "Key: Value" 文本块解析

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod parsing;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{LlmClient, TextGenerator};
pub use config::Config;
pub use error::{LlmError, LlmResult};
pub use models::{
    ComparisonResult, FuelType, ListingQuery, VehicleDetail, VehicleSummary, VehicleType,
};
pub use parsing::{extract_numeric, parse_detail};
pub use services::{compare, fallback_listing};
pub use workflow::{CompareFlow, ExploreFlow, SessionCtx};
