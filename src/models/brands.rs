//! 品牌静态数据
//!
//! 提供下拉框用的品牌列表，以及兜底数据生成时轮换使用的品牌三元组

use crate::models::vehicle::VehicleType;

/// 常见汽车品牌列表（第一项为"不限品牌"）
pub const CAR_BRANDS: &[&str] = &[
    "All Brands",
    "Acura",
    "Alfa Romeo",
    "Aston Martin",
    "Audi",
    "Bentley",
    "BMW",
    "Bugatti",
    "Buick",
    "Cadillac",
    "Chevrolet",
    "Chrysler",
    "Citroën",
    "Dodge",
    "Ferrari",
    "Fiat",
    "Ford",
    "Genesis",
    "GMC",
    "Honda",
    "Hyundai",
    "Infiniti",
    "Jaguar",
    "Jeep",
    "Kia",
    "Lamborghini",
    "Land Rover",
    "Lexus",
    "Lincoln",
    "Lotus",
    "Maserati",
    "Mazda",
    "McLaren",
    "Mercedes-Benz",
    "Mini",
    "Mitsubishi",
    "Nissan",
    "Porsche",
    "Ram",
    "Rolls-Royce",
    "Subaru",
    "Tesla",
    "Toyota",
    "Volkswagen",
    "Volvo",
];

/// 常见摩托车品牌列表（第一项为"不限品牌"）
pub const MOTORCYCLE_BRANDS: &[&str] = &[
    "All Brands",
    "Aprilia",
    "BMW",
    "Ducati",
    "Harley-Davidson",
    "Honda",
    "Indian",
    "Kawasaki",
    "KTM",
    "Moto Guzzi",
    "MV Agusta",
    "Royal Enfield",
    "Suzuki",
    "Triumph",
    "Vespa",
    "Yamaha",
    "Zero",
];

/// 根据车辆类别获取品牌列表
pub fn brands_for(vehicle_type: VehicleType) -> &'static [&'static str] {
    match vehicle_type {
        VehicleType::TwoWheeler => MOTORCYCLE_BRANDS,
        VehicleType::FourWheeler => CAR_BRANDS,
    }
}

/// 兜底数据生成时轮换使用的品牌三元组
pub fn fallback_brands(vehicle_type: VehicleType) -> &'static [&'static str] {
    match vehicle_type {
        VehicleType::TwoWheeler => &["Yamaha", "Honda", "Kawasaki"],
        VehicleType::FourWheeler => &["Toyota", "Honda", "Ford"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brands_for_type() {
        assert_eq!(brands_for(VehicleType::FourWheeler)[0], "All Brands");
        assert!(brands_for(VehicleType::TwoWheeler).contains(&"Ducati"));
        assert!(brands_for(VehicleType::FourWheeler).contains(&"Tesla"));
    }

    #[test]
    fn test_fallback_brand_triples() {
        assert_eq!(fallback_brands(VehicleType::FourWheeler).len(), 3);
        assert_eq!(fallback_brands(VehicleType::TwoWheeler).len(), 3);
    }
}
