//! 保养建议静态数据
//!
//! 提供保养页面需要的数据：日常保养清单、常见故障与解决方案、
//! 预防性保养建议、推荐保养周期表

/// 日常保养清单
pub const MAINTENANCE_TASKS: &[&str] = &[
    "Check and change engine oil regularly",
    "Inspect and replace air filters",
    "Keep tires properly inflated and aligned",
    "Check brake pads and fluid levels",
    "Inspect battery health and clean terminals",
    "Top up coolant, brake, and transmission fluids",
    "Check and replace windshield wipers",
    "Regularly wash and wax the car to prevent rust",
];

/// 常见故障及对应解决方案
pub const COMMON_ISSUES: &[(&str, &str)] = &[
    (
        "Car won't start",
        "Check the battery, ignition switch, or fuel system.",
    ),
    (
        "Brakes making noise",
        "Inspect brake pads for wear or replace brake fluid.",
    ),
    (
        "Engine overheating",
        "Check coolant levels and radiator function.",
    ),
    (
        "Tires losing pressure frequently",
        "Check for punctures or valve leaks.",
    ),
    (
        "AC not cooling properly",
        "Clean or replace air filters and check refrigerant levels.",
    ),
];

/// 预防性保养建议
pub const PREVENTIVE_TIPS: &[&str] = &[
    "Follow the manufacturer's service schedule: Regular servicing can prevent major breakdowns.",
    "Monitor dashboard warning lights: Address issues early to avoid costly repairs.",
    "Drive smoothly: Avoid aggressive driving to reduce wear and tear.",
    "Keep your fuel tank at least half full: Prevents fuel pump damage.",
    "Store your car in a garage: Protects it from extreme weather conditions.",
];

/// 推荐保养周期表（项目, 周期）
pub const SERVICE_INTERVALS: &[(&str, &str)] = &[
    ("Oil & Filter Change", "Every 5,000 - 10,000 km"),
    ("Brake Inspection", "Every 10,000 - 20,000 km"),
    ("Tire Rotation & Alignment", "Every 10,000 - 15,000 km"),
    ("Battery Check", "Every 6 months"),
    ("Coolant Flush", "Every 40,000 km"),
];

/// 查找常见故障的解决方案（精确匹配故障描述）
pub fn solution_for(issue: &str) -> Option<&'static str> {
    COMMON_ISSUES
        .iter()
        .find(|(name, _)| *name == issue)
        .map(|(_, solution)| *solution)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solution_lookup() {
        assert_eq!(
            solution_for("Engine overheating"),
            Some("Check coolant levels and radiator function.")
        );
        assert_eq!(solution_for("Flux capacitor broken"), None);
    }

    #[test]
    fn test_static_tables_nonempty() {
        assert_eq!(MAINTENANCE_TASKS.len(), 8);
        assert_eq!(SERVICE_INTERVALS.len(), 5);
    }
}
