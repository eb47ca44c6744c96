//! 租车服务静态数据
//!
//! 按座位类别提供可租车辆目录和年度保养成本估算

/// 座位类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeaterCategory {
    /// 4 座
    FourSeater,
    /// 5 座
    FiveSeater,
    /// 7 座
    SevenSeater,
    /// SUV
    Suv,
    /// 豪华车
    Luxury,
}

impl SeaterCategory {
    /// 获取展示名称
    pub fn name(self) -> &'static str {
        match self {
            SeaterCategory::FourSeater => "4-seater",
            SeaterCategory::FiveSeater => "5-seater",
            SeaterCategory::SevenSeater => "7-seater",
            SeaterCategory::Suv => "SUV",
            SeaterCategory::Luxury => "Luxury",
        }
    }

    /// 尝试从字符串解析座位类别（精确匹配）
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "4-seater" => Some(SeaterCategory::FourSeater),
            "5-seater" => Some(SeaterCategory::FiveSeater),
            "7-seater" => Some(SeaterCategory::SevenSeater),
            "SUV" => Some(SeaterCategory::Suv),
            "Luxury" => Some(SeaterCategory::Luxury),
            _ => None,
        }
    }
}

/// 可租车辆条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalCar {
    /// 车辆名称
    pub name: &'static str,
    /// 年款
    pub model_year: &'static str,
    /// 每日租金
    pub price_per_day: &'static str,
}

/// 按座位类别获取可租车辆目录
pub fn rental_cars(category: SeaterCategory) -> &'static [RentalCar] {
    match category {
        SeaterCategory::FourSeater => &[
            RentalCar {
                name: "Toyota Corolla",
                model_year: "2022",
                price_per_day: "$40",
            },
            RentalCar {
                name: "Hyundai Elantra",
                model_year: "2021",
                price_per_day: "$35",
            },
        ],
        SeaterCategory::FiveSeater => &[
            RentalCar {
                name: "Honda Civic",
                model_year: "2022",
                price_per_day: "$45",
            },
            RentalCar {
                name: "Mazda 3",
                model_year: "2023",
                price_per_day: "$50",
            },
        ],
        SeaterCategory::SevenSeater => &[
            RentalCar {
                name: "Toyota Innova",
                model_year: "2022",
                price_per_day: "$70",
            },
            RentalCar {
                name: "Kia Carnival",
                model_year: "2023",
                price_per_day: "$85",
            },
        ],
        SeaterCategory::Suv => &[
            RentalCar {
                name: "Ford Explorer",
                model_year: "2023",
                price_per_day: "$90",
            },
            RentalCar {
                name: "Chevrolet Tahoe",
                model_year: "2022",
                price_per_day: "$100",
            },
        ],
        SeaterCategory::Luxury => &[
            RentalCar {
                name: "BMW X5",
                model_year: "2023",
                price_per_day: "$150",
            },
            RentalCar {
                name: "Mercedes-Benz GLE",
                model_year: "2023",
                price_per_day: "$180",
            },
        ],
    }
}

/// 年度保养成本估算（美元）
pub fn annual_maintenance_cost(category: SeaterCategory) -> u32 {
    match category {
        SeaterCategory::FourSeater => 5000,
        SeaterCategory::FiveSeater => 7000,
        SeaterCategory::SevenSeater => 10000,
        SeaterCategory::Suv => 12000,
        SeaterCategory::Luxury => 20000,
    }
}
