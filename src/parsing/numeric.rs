//! 数值提取
//!
//! 从自由文本规格字符串中提取第一个数值（如 "250 HP" → 250）

use regex::Regex;

/// 缺失数据的哨兵字符串
const SENTINEL_NA: &str = "N/A";

/// 从规格字符串中提取第一个数值
///
/// 规则：
/// - 输入为 "N/A" 或不含数字时返回 `None`（缺失数据显式表示，不与 0 混淆）
/// - 先去除千位分隔逗号（"$40,000" 提取为 40000，而不是 40）
/// - 匹配第一段 `数字[.数字]` 并解析为浮点数
///
/// # 参数
/// - `text`: 规格字符串（如 "250 HP"、"$40,000"、"300 miles"）
///
/// # 返回
/// 返回第一个数值，缺失时返回 `None`，绝不 panic
pub fn extract_numeric(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed == SENTINEL_NA {
        return None;
    }

    let normalized = strip_thousands_separators(trimmed);

    let re = Regex::new(r"\d+(?:\.\d+)?").ok()?;
    let matched = re.find(&normalized)?;
    matched.as_str().parse::<f64>().ok()
}

/// 去除千位分隔逗号
///
/// 只去除两侧都是数字的逗号，"A, B" 这类列表分隔不受影响
fn strip_thousands_separators(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == ',' {
            let prev_is_digit = i > 0 && chars[i - 1].is_ascii_digit();
            let next_is_digit = chars.get(i + 1).is_some_and(|n| n.is_ascii_digit());
            if prev_is_digit && next_is_digit {
                continue;
            }
        }
        result.push(c);
    }
    result
}
