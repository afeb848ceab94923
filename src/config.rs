use component_model::GlobalConfig;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub global: GlobalConfig,
}
