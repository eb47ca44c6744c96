//! 探索页流程 - 流程层
//!
//! 核心职责：定义"按条件找车 → 查看单车详情"的完整流程
//!
//! 流程由展示层显式调用，每个处理器输入查询条件、输出视图模型，
//! 不存在任何隐式重渲染驱动的控制流

use tracing::info;

use crate::clients::TextGenerator;
use crate::config::Config;
use crate::models::{ListingQuery, VehicleDetail, VehicleSummary};
use crate::services::{ExplorerService, VehicleInfoService};
use crate::workflow::session::SessionCtx;

/// 列表页视图模型
#[derive(Debug, Clone, PartialEq)]
pub struct ListingView {
    /// 页面标题
    pub title: String,
    /// 车辆列表
    pub vehicles: Vec<VehicleSummary>,
}

/// 详情页视图模型
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    /// 车辆名称
    pub vehicle_name: String,
    /// 详细规格
    pub detail: VehicleDetail,
    /// 是否为兜底数据（展示层据此提示数据降级）
    pub from_fallback: bool,
}

/// 探索页流程
///
/// - 编排"搜索列表、查看详情"两个事件处理器
/// - 不持有会话状态（`SessionCtx` 由调用方传入）
/// - 只依赖业务能力（services）
pub struct ExploreFlow<G> {
    explorer: ExplorerService<G>,
    vehicle_info: VehicleInfoService<G>,
}

impl<G: TextGenerator + Clone> ExploreFlow<G> {
    /// 创建新的探索页流程
    pub fn new(generator: G, config: &Config) -> Self {
        Self {
            explorer: ExplorerService::new(generator.clone(), config),
            vehicle_info: VehicleInfoService::new(generator),
        }
    }

    /// 处理"搜索车辆"事件
    pub async fn search(&self, session: &mut SessionCtx, query: &ListingQuery) -> ListingView {
        info!(
            "🔍 搜索车辆: {} {} / {} / ${} - ${}",
            query.fuel_type, query.vehicle_type, query.brand, query.min_price, query.max_price
        );

        let vehicles = self.explorer.fetch_listing(session, query).await;

        ListingView {
            title: format!(
                "🚘 Top {} {} {}s",
                vehicles.len(),
                query.fuel_type,
                query.vehicle_type
            ),
            vehicles,
        }
    }

    /// 处理"查看详细规格"事件
    pub async fn detail(&self, vehicle_name: &str) -> DetailView {
        info!("📋 查看详情: {}", vehicle_name);

        let fetched = self.vehicle_info.fetch_detail(vehicle_name).await;

        DetailView {
            vehicle_name: vehicle_name.to_string(),
            detail: fetched.detail,
            from_fallback: fetched.from_fallback,
        }
    }
}
