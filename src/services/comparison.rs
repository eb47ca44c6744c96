//! 车辆比较服务 - 业务能力层
//!
//! 两部分能力：
//! - `compare`: 纯函数打分引擎，按固定三项（续航、价格、马力）逐项评分
//! - `ComparisonService::narrative`: 向远端要一段自由文本比较叙述（单次尝试）

use tracing::warn;

use crate::clients::TextGenerator;
use crate::models::{ComparisonResult, VehicleDetail};
use crate::parsing::extract_numeric;

/// 比较维度（按固定顺序评估）
const CRITERIA: &[Criterion] = &[Criterion::Range, Criterion::Price, Criterion::Horsepower];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Criterion {
    Range,
    Price,
    Horsepower,
}

impl Criterion {
    fn label(self) -> &'static str {
        match self {
            Criterion::Range => "range",
            Criterion::Price => "price",
            Criterion::Horsepower => "horsepower",
        }
    }

    fn value_of(self, detail: &VehicleDetail) -> f64 {
        let field = match self {
            Criterion::Range => &detail.range,
            Criterion::Price => &detail.price,
            Criterion::Horsepower => &detail.horsepower,
        };
        // 缺失数据按 0 参与评分：0 永远拿不到分，只会产生 "similar" 说明
        extract_numeric(field).unwrap_or(0.0)
    }
}

/// 比较两辆车并给出胜者与逐项说明
///
/// 纯函数：无隐藏状态，相同输入永远得到相同输出。
///
/// 规则：
/// - 价格取严格更低的正值得 1 分；续航与马力取严格更高的正值得 1 分
/// - 平局或双方皆缺失记一条 "similar" 说明，不计分
/// - 每个维度恰好产生一条说明
/// - 总分高者胜；总分相同时先到者（第一辆车）胜
pub fn compare(
    name_a: &str,
    detail_a: &VehicleDetail,
    name_b: &str,
    detail_b: &VehicleDetail,
) -> ComparisonResult {
    let mut score_a = 0u32;
    let mut score_b = 0u32;
    let mut reasons = Vec::with_capacity(CRITERIA.len());

    for &criterion in CRITERIA {
        let a = criterion.value_of(detail_a);
        let b = criterion.value_of(detail_b);

        let reason = match criterion {
            Criterion::Price => {
                // 价格越低越好
                if a < b && a > 0.0 {
                    score_a += 1;
                    format!(
                        "{} has a lower price (${} vs ${})",
                        name_a,
                        fmt_value(a),
                        fmt_value(b)
                    )
                } else if b < a && b > 0.0 {
                    score_b += 1;
                    format!(
                        "{} has a lower price (${} vs ${})",
                        name_b,
                        fmt_value(b),
                        fmt_value(a)
                    )
                } else {
                    "Both vehicles have similar price".to_string()
                }
            }
            _ => {
                // 续航与马力越高越好
                if a > b && a > 0.0 {
                    score_a += 1;
                    format!(
                        "{} has better {} ({} vs {})",
                        name_a,
                        criterion.label(),
                        fmt_value(a),
                        fmt_value(b)
                    )
                } else if b > a && b > 0.0 {
                    score_b += 1;
                    format!(
                        "{} has better {} ({} vs {})",
                        name_b,
                        criterion.label(),
                        fmt_value(b),
                        fmt_value(a)
                    )
                } else {
                    format!("Both vehicles have similar {}", criterion.label())
                }
            }
        };

        reasons.push(reason);
    }

    let winner = if score_a >= score_b { name_a } else { name_b };

    ComparisonResult {
        winner: winner.to_string(),
        reasons,
    }
}

/// 数值展示：整数不带小数点（400 而不是 400.0）
fn fmt_value(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}

/// 车辆比较叙述服务
pub struct ComparisonService<G> {
    generator: G,
}

impl<G: TextGenerator> ComparisonService<G> {
    /// 创建新的比较服务
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// 请求一段自由文本比较叙述（单次尝试，不重试）
    ///
    /// # 参数
    /// - `vehicle_a` / `vehicle_b`: 两辆车的名称
    ///
    /// # 返回
    /// 返回叙述文本；失败时返回点名两辆车的致歉文案，绝不失败
    pub async fn narrative(&self, vehicle_a: &str, vehicle_b: &str) -> String {
        let prompt = format!(
            "Compare {vehicle_a} and {vehicle_b} in terms of performance, fuel efficiency, and features."
        );

        match self.generator.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("⚠️ 比较叙述请求失败: {}", e);
                format!(
                    "🚗 {vehicle_a} and {vehicle_b} are both great choices, \
                     but detailed comparison is unavailable at the moment."
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(range: &str, price: &str, horsepower: &str) -> VehicleDetail {
        VehicleDetail {
            range: range.to_string(),
            price: price.to_string(),
            horsepower: horsepower.to_string(),
            features: "N/A".to_string(),
        }
    }

    #[test]
    fn test_clean_sweep_for_first_vehicle() {
        let a = detail("400 miles", "$30000", "300");
        let b = detail("300 miles", "$40000", "250");

        let result = compare("A", &a, "B", &b);

        assert_eq!(result.winner, "A");
        assert_eq!(result.reasons.len(), 3);
        assert!(result.reasons[0].contains("A has better range (400 vs 300)"));
        assert!(result.reasons[1].contains("A has a lower price ($30000 vs $40000)"));
        assert!(result.reasons[2].contains("A has better horsepower (300 vs 250)"));
    }

    #[test]
    fn test_deterministic_across_invocations() {
        let a = detail("250 miles", "$35,000", "288");
        let b = detail("N/A", "$28,000", "192");

        let first = compare("EV", &a, "Gas", &b);
        let second = compare("EV", &a, "Gas", &b);

        assert_eq!(first, second);
    }

    #[test]
    fn test_tie_goes_to_first_named() {
        let same = detail("300 miles", "$40000", "250");
        let result = compare("First", &same, "Second", &same.clone());

        assert_eq!(result.winner, "First");
        assert_eq!(result.reasons.len(), 3);
        assert!(result.reasons.iter().all(|r| r.contains("similar")));
    }

    #[test]
    fn test_missing_data_never_scores() {
        // 缺失（N/A → 0）不能因为"更低"而赢下价格维度
        let a = detail("N/A", "N/A", "N/A");
        let b = detail("300 miles", "$40000", "250");

        let result = compare("Ghost", &a, "Real", &b);

        assert_eq!(result.winner, "Real");
        assert!(result.reasons[1].contains("Real has a lower price"));
    }

    #[test]
    fn test_both_missing_is_similar_note() {
        let a = detail("N/A", "$30000", "250");
        let b = detail("N/A", "$30000", "250");

        let result = compare("A", &a, "B", &b);

        assert_eq!(result.reasons[0], "Both vehicles have similar range");
    }

    #[test]
    fn test_split_decision() {
        // A 价格更低，B 续航和马力更高 → B 2:1 胜
        let a = detail("200 miles", "$25000", "180");
        let b = detail("350 miles", "$45000", "320");

        let result = compare("A", &a, "B", &b);

        assert_eq!(result.winner, "B");
    }

    #[test]
    fn test_thousands_separator_in_price() {
        let a = detail("N/A", "$30,000", "250");
        let b = detail("N/A", "$40,000", "250");

        let result = compare("A", &a, "B", &b);

        assert_eq!(result.winner, "A");
        assert!(result.reasons[1].contains("$30000 vs $40000"));
    }

    #[test]
    fn test_decimal_values_kept() {
        assert_eq!(fmt_value(2.5), "2.5");
        assert_eq!(fmt_value(400.0), "400");
    }
}
