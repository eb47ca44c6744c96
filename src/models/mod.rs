pub mod brands;
pub mod maintenance;
pub mod rental;
pub mod vehicle;

pub use brands::{brands_for, fallback_brands, CAR_BRANDS, MOTORCYCLE_BRANDS};
pub use rental::{annual_maintenance_cost, rental_cars, RentalCar, SeaterCategory};
pub use vehicle::{
    ChatMessage, ChatRole, ComparisonResult, FuelType, ListingQuery, VehicleDetail,
    VehicleSummary, VehicleType,
};
