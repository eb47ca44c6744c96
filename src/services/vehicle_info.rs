//! 车辆详情服务 - 业务能力层
//!
//! 只负责"抓取单辆车详细规格"能力，不关心页面流程
//!
//! 详情查询只尝试一次：任何失败（包括空响应）都返回固定的
//! 中档车兜底文本，调用方永远拿到可解析的文本块

use tracing::{info, warn};

use crate::clients::TextGenerator;
use crate::models::VehicleDetail;
use crate::parsing::parse_detail;

/// 兜底详情文本：一辆普通中档车
const FALLBACK_DETAIL_TEXT: &str = "Range: 300 miles\n\
Price: $40000\n\
Horsepower: 250\n\
Features: Air Conditioning, Bluetooth, Cruise Control, Navigation";

/// 详情抓取结果
///
/// `from_fallback` 让"这是兜底数据"这一事实显式可见、可测试，
/// 展示层据此提示用户数据是降级的
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailFetch {
    /// 解析后的详细规格
    pub detail: VehicleDetail,
    /// 是否来自兜底数据
    pub from_fallback: bool,
}

/// 车辆详情服务
pub struct VehicleInfoService<G> {
    generator: G,
}

impl<G: TextGenerator> VehicleInfoService<G> {
    /// 创建新的详情服务
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// 抓取车辆详情文本（单次尝试，失败走兜底）
    ///
    /// # 参数
    /// - `vehicle_name`: 车辆名称
    ///
    /// # 返回
    /// 返回行式 "Key: Value" 文本块，绝不失败
    pub async fn fetch_detail_text(&self, vehicle_name: &str) -> (String, bool) {
        let prompt = build_detail_prompt(vehicle_name);

        match self.generator.generate(&prompt).await {
            Ok(text) if !text.is_empty() => {
                info!("✓ 已取得 {} 的详细规格", vehicle_name);
                (text, false)
            }
            Ok(_) => {
                warn!("⚠️ 远端返回空详情，使用兜底数据: {}", vehicle_name);
                (FALLBACK_DETAIL_TEXT.to_string(), true)
            }
            Err(e) => {
                warn!("⚠️ 详情抓取失败 ({})，使用兜底数据: {}", vehicle_name, e);
                (FALLBACK_DETAIL_TEXT.to_string(), true)
            }
        }
    }

    /// 抓取并解析车辆详情
    pub async fn fetch_detail(&self, vehicle_name: &str) -> DetailFetch {
        let (text, from_fallback) = self.fetch_detail_text(vehicle_name).await;
        DetailFetch {
            detail: parse_detail(&text),
            from_fallback,
        }
    }
}

/// 构建详情查询提示词
fn build_detail_prompt(vehicle_name: &str) -> String {
    format!(
        r#"Provide detailed specifications of {vehicle_name} in the following format:
Range: <value in miles or km>
Price: <value in $ with numbers only>
Horsepower: <numeric value>
Features: <comma-separated list>

For non-electric vehicles, you can put 'N/A' for Range.
For price, give a specific number like '$40000' without commas.
For horsepower, give a specific number like '250'.
Only return the information in the exact format above without extra text."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LlmError, LlmResult};
    use async_trait::async_trait;

    /// 固定返回一种结果的假生成器
    enum FixedGenerator {
        Reply(String),
        Fail,
    }

    #[async_trait]
    impl TextGenerator for FixedGenerator {
        async fn generate(&self, _prompt: &str) -> LlmResult<String> {
            match self {
                FixedGenerator::Reply(text) => Ok(text.clone()),
                FixedGenerator::Fail => Err(LlmError::ApiCallFailed {
                    model: "fixed".to_string(),
                    source: "remote unavailable".into(),
                }),
            }
        }
    }

    #[tokio::test]
    async fn test_successful_fetch_is_not_fallback() {
        let reply = "Range: 272 miles\nPrice: $42000\nHorsepower: 283\nFeatures: Autopilot";
        let service = VehicleInfoService::new(FixedGenerator::Reply(reply.to_string()));

        let fetched = service.fetch_detail("Tesla Model 3").await;

        assert!(!fetched.from_fallback);
        assert_eq!(fetched.detail.range, "272 miles");
        assert_eq!(fetched.detail.horsepower, "283");
    }

    #[tokio::test]
    async fn test_failure_yields_parseable_fallback() {
        let service = VehicleInfoService::new(FixedGenerator::Fail);

        let fetched = service.fetch_detail("Anything").await;

        assert!(fetched.from_fallback);
        assert_eq!(fetched.detail.range, "300 miles");
        assert_eq!(fetched.detail.price, "$40000");
        assert_eq!(fetched.detail.horsepower, "250");
        assert_eq!(fetched.detail.feature_list().len(), 4);
    }

    #[tokio::test]
    async fn test_detail_prompt_names_vehicle() {
        let prompt = build_detail_prompt("Honda Civic");
        assert!(prompt.contains("Provide detailed specifications of Honda Civic"));
    }
}
