use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// 一个可构建组件：名字、源文件、组件依赖、全局宏
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    pub name: String,
    pub sources: Vec<String>,
    pub deps: Vec<String>,
    pub global_macros: Vec<String>, // 简化为字符串，NAME 或 NAME=VALUE
}

impl Component {
    pub fn new(name: impl Into<String>, sources: Vec<String>) -> Self {
        Component {
            name: name.into(),
            sources,
            deps: vec![],
            global_macros: vec![],
        }
    }

    /// 追加组件依赖，不查重，不检查路径是否存在
    pub fn add_comp_dep(&mut self, path: impl Into<String>) {
        self.deps.push(path.into());
    }

    /// 追加全局宏，原样保留，不做语法解析
    pub fn add_global_macro(&mut self, macro_str: impl Into<String>) {
        self.global_macros.push(macro_str.into());
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Int(i64),
    Str(String),
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Int(v) => write!(f, "{}", v),
            ConfigValue::Str(s) => write!(f, "{}", s),
        }
    }
}

/// 构建编排器的全局配置，按键值存放
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlobalConfig(BTreeMap<String, ConfigValue>);

impl GlobalConfig {
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.0.get(key)
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.0.get(key) {
            Some(ConfigValue::Int(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn set(&mut self, key: impl Into<String>, value: ConfigValue) {
        self.0.insert(key.into(), value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ConfigValue)> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
