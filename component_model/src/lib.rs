pub mod model;

pub use crate::model::{Component, ConfigValue, GlobalConfig};

use regex::Regex;

/// 解析 KEY=VALUE 形式的配置赋值，空行和 # 注释行跳过
pub fn parse_assignments(text: &str) -> Vec<(String, ConfigValue)> {
    let re_assign = Regex::new(r"^([A-Za-z0-9_]+)\s*=\s*(.*)$").unwrap();

    let mut result = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(cap) = re_assign.captures(line) {
            let key = cap[1].to_string();
            let val = cap[2].trim();
            let value = match val.parse::<i64>() {
                Ok(v) => ConfigValue::Int(v),
                Err(_) => ConfigValue::Str(val.to_string()),
            };
            result.push((key, value));
        }
    }
    result
}
