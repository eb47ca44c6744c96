//! 车辆数据模型
//!
//! 定义核心数据记录：车辆摘要、详细规格、比较结果、筛选条件

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// 燃料类型枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelType {
    /// 电动
    #[serde(rename = "Electric")]
    Electric,
    /// 非电动（燃油等）
    #[serde(rename = "Non-Electric")]
    NonElectric,
}

impl FuelType {
    /// 获取标准名称（与远端返回的字符串一致）
    pub fn name(self) -> &'static str {
        match self {
            FuelType::Electric => "Electric",
            FuelType::NonElectric => "Non-Electric",
        }
    }

    /// 尝试从字符串解析燃料类型（精确匹配）
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Electric" => Some(FuelType::Electric),
            "Non-Electric" => Some(FuelType::NonElectric),
            _ => None,
        }
    }
}

impl Display for FuelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 车辆类别枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    /// 两轮车（摩托车）
    #[serde(rename = "2-Wheeler")]
    TwoWheeler,
    /// 四轮车（汽车）
    #[serde(rename = "4-Wheeler")]
    FourWheeler,
}

impl VehicleType {
    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            VehicleType::TwoWheeler => "2-Wheeler",
            VehicleType::FourWheeler => "4-Wheeler",
        }
    }

    /// 尝试从字符串解析车辆类别（精确匹配）
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "2-Wheeler" => Some(VehicleType::TwoWheeler),
            "4-Wheeler" => Some(VehicleType::FourWheeler),
            _ => None,
        }
    }
}

impl Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 车辆摘要记录
///
/// 对应远端返回的结构化列表中的单条记录。
/// 字段名必须与远端输出的键完全一致（Name / Price / Range / Fuel / Horsepower），
/// 出现未知键时解码直接失败（宁可回退到兜底数据，也不接受脏数据）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VehicleSummary {
    /// 完整车辆名称
    #[serde(rename = "Name")]
    pub name: String,
    /// 价格（带货币符号的字符串，如 "$40,000"）
    #[serde(rename = "Price")]
    pub price: String,
    /// 续航（"N/A" 或 "<数字> <单位>"）
    #[serde(rename = "Range")]
    pub range: String,
    /// 燃料类型
    #[serde(rename = "Fuel")]
    pub fuel: FuelType,
    /// 马力（如 "250 HP"）
    #[serde(rename = "Horsepower")]
    pub horsepower: String,
}

/// 车辆详细规格
///
/// 固定四键结构，远端输出缺失的键保持默认值 "N/A"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleDetail {
    /// 续航
    pub range: String,
    /// 价格
    pub price: String,
    /// 马力
    pub horsepower: String,
    /// 功能列表（逗号分隔）
    pub features: String,
}

impl Default for VehicleDetail {
    fn default() -> Self {
        Self {
            range: "N/A".to_string(),
            price: "N/A".to_string(),
            horsepower: "N/A".to_string(),
            features: "N/A".to_string(),
        }
    }
}

impl VehicleDetail {
    /// 按逗号拆分功能列表（去除两侧空白，过滤空项）
    pub fn feature_list(&self) -> Vec<String> {
        if self.features == "N/A" {
            return Vec::new();
        }
        self.features
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// 两辆车的比较结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// 胜出车辆名称
    pub winner: String,
    /// 逐项比较说明（每个比较维度恰好一条）
    pub reasons: Vec<String>,
}

/// 车辆列表查询条件
///
/// 五元组同时充当会话缓存的复合键
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListingQuery {
    /// 车辆类别
    pub vehicle_type: VehicleType,
    /// 品牌（"All Brands" 表示不限品牌）
    pub brand: String,
    /// 最低价格（美元）
    pub min_price: u32,
    /// 最高价格（美元）
    pub max_price: u32,
    /// 燃料类型
    pub fuel_type: FuelType,
}

impl ListingQuery {
    /// 生成会话缓存的复合键
    pub fn cache_key(&self) -> String {
        format!(
            "{}_{}_{}_{}_{}",
            self.vehicle_type, self.brand, self.min_price, self.max_price, self.fuel_type
        )
    }
}

/// 聊天消息角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatRole {
    /// 用户
    User,
    /// 助手
    Assistant,
}

impl ChatRole {
    pub fn name(self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// 聊天消息（会话历史中的一条）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// 角色
    pub role: ChatRole,
    /// 消息内容
    pub content: String,
}
