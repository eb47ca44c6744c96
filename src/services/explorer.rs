//! 车辆列表服务 - 业务能力层
//!
//! 只负责"按条件抓取车辆列表"能力，不关心页面流程
//!
//! 弹性策略（对调用方完全透明，调用方永远拿到值）：
//! 1. 缓存命中直接返回，不再访问远端
//! 2. 缓存未命中时先生成确定性兜底数据，再尝试远端
//! 3. 最多尝试 3 轮：调用远端 → 去除代码围栏 → 严格解码
//! 4. 解码失败或调用失败则等待后重试；限流信号直接短路走兜底
//! 5. 重试耗尽返回兜底数据

use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::clients::TextGenerator;
use crate::config::Config;
use crate::error::{LlmError, LlmResult};
use crate::models::{fallback_brands, FuelType, ListingQuery, VehicleSummary, VehicleType};
use crate::workflow::SessionCtx;

/// 车辆列表服务
pub struct ExplorerService<G> {
    generator: G,
    max_retries: usize,
    retry_delay: Duration,
}

impl<G: TextGenerator> ExplorerService<G> {
    /// 创建新的列表服务
    pub fn new(generator: G, config: &Config) -> Self {
        Self {
            generator,
            max_retries: config.max_retries,
            retry_delay: config.retry_delay(),
        }
    }

    /// 按条件抓取车辆列表
    ///
    /// # 参数
    /// - `session`: 会话上下文（持有列表缓存）
    /// - `query`: 五元组查询条件
    ///
    /// # 返回
    /// 返回车辆摘要列表；远端不可用时返回确定性兜底数据，绝不失败
    pub async fn fetch_listing(
        &self,
        session: &mut SessionCtx,
        query: &ListingQuery,
    ) -> Vec<VehicleSummary> {
        let cache_key = query.cache_key();

        // 缓存命中：本会话内不再查询远端（容忍会话期间的数据陈旧）
        if let Some(cached) = session.cached_listing(&cache_key) {
            info!("⚡ 缓存命中: {}", cache_key);
            return cached.to_vec();
        }

        // 兜底数据先备好，远端全挂也有东西可还
        let fallback = fallback_listing(query);
        let prompt = build_listing_prompt(query);

        for attempt in 0..self.max_retries {
            match self.generator.generate(&prompt).await {
                Ok(text) => match decode_listing(&text) {
                    Ok(listing) => {
                        info!("✓ 远端返回 {} 条车辆记录", listing.len());
                        session.store_listing(cache_key, listing.clone());
                        return listing;
                    }
                    Err(e) => {
                        warn!(
                            "列表解码失败 (尝试 {}/{}): {}",
                            attempt + 1,
                            self.max_retries,
                            e
                        );
                    }
                },
                Err(e) if e.is_rate_limited() => {
                    // 限流时重试只会继续被拒，直接走兜底
                    warn!("⚠️ 远端限流，跳过重试，使用兜底数据");
                    return fallback;
                }
                Err(e) => {
                    warn!(
                        "远端调用失败 (尝试 {}/{}): {}",
                        attempt + 1,
                        self.max_retries,
                        e
                    );
                }
            }

            if attempt + 1 < self.max_retries {
                debug!("等待 {:?} 后重试...", self.retry_delay);
                sleep(self.retry_delay).await;
            }
        }

        warn!("⚠️ 已尝试 {} 次仍未取得可用数据，使用兜底数据", self.max_retries);
        fallback
    }
}

/// 构建结构化列表提示词
fn build_listing_prompt(query: &ListingQuery) -> String {
    let brand_text = if query.brand == "All Brands" {
        String::new()
    } else {
        format!("from {} ", query.brand)
    };

    format!(
        r#"List the top 10 {fuel} {vtype}s {brand}priced between ${min} - ${max}.
Return results in this exact format as a JSON array:
[
  {{"Name": "Full Vehicle Name", "Price": "Price in $", "Range": "Range in miles or N/A", "Fuel": "{fuel}", "Horsepower": "HP value"}},
  ... (repeat for all vehicles)
]

For electric vehicles, include range in miles. For non-electric, range should be "N/A".
Only return the structured data without any other text."#,
        fuel = query.fuel_type,
        vtype = query.vehicle_type,
        brand = brand_text,
        min = query.min_price,
        max = query.max_price,
    )
}

/// 解码远端返回的结构化列表
///
/// 容忍包裹的代码围栏和围栏后的语言标签；载荷本身用严格模式解码，
/// 键名或类型不符一律失败（由调用方回退到兜底数据）
fn decode_listing(text: &str) -> LlmResult<Vec<VehicleSummary>> {
    let payload = strip_code_fence(text);

    serde_json::from_str::<Vec<VehicleSummary>>(payload).map_err(|e| LlmError::MalformedListing {
        reason: e.to_string(),
    })
}

/// 去除包裹载荷的代码围栏标记和可选的 "json" 语言标签
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.split("```").nth(1) else {
        return trimmed;
    };
    let inner = inner.trim_start();
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.trim()
}

/// 生成确定性兜底列表
///
/// 对固定的查询条件，输出在多次调用间完全一致：
/// - 恰好 10 条记录，价格从 min 向 max 严格递增
/// - 价格步长 = (max - min) / 10，区间非正时取 5000
/// - 马力 = 150 + 25i，年款 = 2023 + (i mod 3)
/// - 车身样式按类别走 3 元循环，品牌按类别三元组循环
pub fn fallback_listing(query: &ListingQuery) -> Vec<VehicleSummary> {
    let brands: Vec<&str> = if query.brand == "All Brands" || query.brand.is_empty() {
        fallback_brands(query.vehicle_type).to_vec()
    } else {
        vec![query.brand.as_str()]
    };

    let base_price = f64::from(query.min_price);
    let increment = if query.max_price > query.min_price {
        f64::from(query.max_price - query.min_price) / 10.0
    } else {
        5000.0
    };

    (1..=10u32)
        .map(|i| {
            let body_style = body_style_for(query.vehicle_type, i);
            let brand = brands[(i as usize) % brands.len()];
            let price = (base_price + f64::from(i) * increment) as u32;
            let horsepower = 150 + i * 25;
            let model_year = 2023 + (i % 3);

            let range = match query.fuel_type {
                FuelType::Electric => format!("{} miles", 200 + i * 20),
                FuelType::NonElectric => "N/A".to_string(),
            };

            VehicleSummary {
                name: format!("{} {} {}", brand, body_style, model_year),
                price: format!("${}", format_thousands(price)),
                range,
                fuel: query.fuel_type,
                horsepower: format!("{} HP", horsepower),
            }
        })
        .collect()
}

/// 按类别和序号选择车身样式（3 元循环）
fn body_style_for(vehicle_type: VehicleType, i: u32) -> &'static str {
    match (vehicle_type, i % 3) {
        (VehicleType::FourWheeler, 0) => "SUV",
        (VehicleType::FourWheeler, 1) => "Sedan",
        (VehicleType::FourWheeler, _) => "Crossover",
        (VehicleType::TwoWheeler, 0) => "Sport",
        (VehicleType::TwoWheeler, 1) => "Cruiser",
        (VehicleType::TwoWheeler, _) => "Touring",
    }
}

/// 千位分隔格式化（24000 → "24,000"）
fn format_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}
