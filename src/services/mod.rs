pub mod chat;
pub mod comparison;
pub mod explorer;
pub mod vehicle_info;

pub use chat::ChatService;
pub use comparison::{compare, ComparisonService};
pub use explorer::{fallback_listing, ExplorerService};
pub use vehicle_info::{DetailFetch, VehicleInfoService};
