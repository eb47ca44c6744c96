//! 应用编排
//!
//! 把各页面流程串成一次完整的演示会话：
//! 搜索列表 → 查看详情 → 两车对比 → 自由问答

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use crate::clients::LlmClient;
use crate::config::Config;
use crate::models::{
    brands_for, maintenance, rental_cars, FuelType, ListingQuery, SeaterCategory, VehicleType,
};
use crate::services::ChatService;
use crate::utils::logging;
use crate::workflow::{CompareFlow, ExploreFlow, SessionCtx};

/// 应用主结构
pub struct App {
    config: Config,
    explore: ExploreFlow<Arc<LlmClient>>,
    compare: CompareFlow<Arc<LlmClient>>,
    chat: ChatService<Arc<LlmClient>>,
    session: SessionCtx,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Self {
        logging::log_startup(&config.llm_model_name);

        if config.llm_api_key.is_empty() {
            warn!("⚠️ 未配置 LLM_API_KEY，远端调用会失败并全部走兜底数据");
        }

        // 各流程共享同一个客户端
        let client = Arc::new(LlmClient::new(&config));

        Self {
            explore: ExploreFlow::new(client.clone(), &config),
            compare: CompareFlow::new(client.clone()),
            chat: ChatService::new(client),
            config,
            session: SessionCtx::new(),
        }
    }

    /// 运行一次演示会话
    pub async fn run(&mut self) -> Result<()> {
        // ========== 探索：按条件搜索 ==========
        let vehicle_type = VehicleType::FourWheeler;
        info!(
            "可选品牌 {} 个（{} 类别）",
            brands_for(vehicle_type).len(),
            vehicle_type
        );

        let query = ListingQuery {
            vehicle_type,
            brand: "All Brands".to_string(),
            min_price: 20000,
            max_price: 100000,
            fuel_type: FuelType::Electric,
        };

        let listing = self.explore.search(&mut self.session, &query).await;
        info!("{}", listing.title);
        for (i, vehicle) in listing.vehicles.iter().enumerate() {
            info!(
                "  {}. {} | {} | {} | {}",
                i + 1,
                vehicle.name,
                vehicle.price,
                vehicle.range,
                vehicle.horsepower
            );
        }

        // ========== 详情：查看第一辆车 ==========
        if let Some(first) = listing.vehicles.first() {
            let view = self.explore.detail(&first.name).await;
            info!("📋 {} 详细规格:", view.vehicle_name);
            info!("  Range: {}", view.detail.range);
            info!("  Price: {}", view.detail.price);
            info!("  Horsepower: {}", view.detail.horsepower);
            for feature in view.detail.feature_list() {
                info!("  ✅ {}", feature);
            }
            if view.from_fallback {
                info!("📢 以上为兜底数据（远端不可用）");
            }
        }

        // ========== 比较：两车对比 ==========
        let compare_view = self.compare.run("Tesla Model 3", "Toyota Camry").await;
        info!("{}", compare_view.title);
        info!("🏆 Winner: {}", compare_view.verdict.winner);
        for reason in &compare_view.verdict.reasons {
            info!("  - {}", reason);
        }
        info!("{}", compare_view.narrative);

        // ========== 问答 ==========
        let reply = self
            .chat
            .ask(&mut self.session, "What should I check before buying a used EV?")
            .await;
        info!("🤖 {}", reply);

        // ========== 静态页面数据：保养与租车 ==========
        info!("📋 日常保养清单（前 3 项）:");
        for task in maintenance::MAINTENANCE_TASKS.iter().take(3) {
            info!("  - {}", task);
        }
        if let Some(solution) = maintenance::solution_for("Engine overheating") {
            info!("⚠️ Engine overheating → {}", solution);
        }

        info!("🚙 SUV 租车目录:");
        for car in rental_cars(SeaterCategory::Suv) {
            info!(
                "  {} ({}) - 💰 {} / day",
                car.name, car.model_year, car.price_per_day
            );
        }

        if self.config.verbose_logging {
            info!("会话缓存条目: {}", self.session.cache_len());
            info!("聊天历史条数: {}", self.session.chat_history.len());
        }

        Ok(())
    }
}
