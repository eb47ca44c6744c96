//! 比较页流程 - 流程层
//!
//! 核心职责：定义"两辆车对比"的完整流程
//!
//! 流程顺序：
//! 1. 逐辆抓取详细规格（各自带兜底）
//! 2. 纯函数打分引擎给出胜者与逐项说明
//! 3. 向远端要一段自由文本叙述（失败走致歉文案）

use tracing::info;

use crate::clients::TextGenerator;
use crate::models::ComparisonResult;
use crate::services::{compare, ComparisonService, VehicleInfoService};

/// 比较页视图模型
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareView {
    /// 页面标题
    pub title: String,
    /// 远端生成的比较叙述
    pub narrative: String,
    /// 打分引擎给出的结论
    pub verdict: ComparisonResult,
    /// 结论是否基于兜底规格（任一侧详情走了兜底即为 true）
    pub from_fallback: bool,
}

/// 比较页流程
pub struct CompareFlow<G> {
    vehicle_info: VehicleInfoService<G>,
    comparison: ComparisonService<G>,
}

impl<G: TextGenerator + Clone> CompareFlow<G> {
    /// 创建新的比较页流程
    pub fn new(generator: G) -> Self {
        Self {
            vehicle_info: VehicleInfoService::new(generator.clone()),
            comparison: ComparisonService::new(generator),
        }
    }

    /// 处理"比较两辆车"事件
    ///
    /// # 参数
    /// - `vehicle_a` / `vehicle_b`: 两辆车的名称
    pub async fn run(&self, vehicle_a: &str, vehicle_b: &str) -> CompareView {
        info!("⚖️ 比较车辆: {} vs {}", vehicle_a, vehicle_b);

        // 逐辆抓取（顺序执行，每次用户操作内只有一串阻塞调用）
        let fetched_a = self.vehicle_info.fetch_detail(vehicle_a).await;
        let fetched_b = self.vehicle_info.fetch_detail(vehicle_b).await;

        let verdict = compare(vehicle_a, &fetched_a.detail, vehicle_b, &fetched_b.detail);
        info!("✓ 打分结论: {} 胜出", verdict.winner);

        let narrative = self.comparison.narrative(vehicle_a, vehicle_b).await;

        CompareView {
            title: format!("🔹 Comparison: {} vs {}", vehicle_a, vehicle_b),
            narrative,
            verdict,
            from_fallback: fetched_a.from_fallback || fetched_b.from_fallback,
        }
    }
}
