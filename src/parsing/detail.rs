//! 详细规格解析
//!
//! 将远端返回的行式 "Key: Value" 文本块解析为固定结构的 `VehicleDetail`

use crate::models::VehicleDetail;

/// 解析车辆详细规格文本
///
/// 规则：
/// - 按行拆分，只处理含冒号的行，按第一个冒号分割键值
/// - 键值两侧空白去除后，键必须精确匹配 Range / Price / Horsepower / Features
/// - 同键多次出现时后者覆盖前者
/// - 未出现的键保持默认值 "N/A"
///
/// 该函数是全函数：任何输入都能得到结果，最坏情况是四个字段全为 "N/A"
pub fn parse_detail(text: &str) -> VehicleDetail {
    let mut detail = VehicleDetail::default();

    for line in text.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim().to_string();

        match key {
            "Range" => detail.range = value,
            "Price" => detail.price = value,
            "Horsepower" => detail.horsepower = value,
            "Features" => detail.features = value,
            _ => {}
        }
    }

    detail
}
