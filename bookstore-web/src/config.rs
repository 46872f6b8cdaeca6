//! Back-office configuration compiled into the build

use bookstore_common::BackofficeConfig;
use std::sync::OnceLock;

const CONFIG_YAML: &str = include_str!("../backoffice.yaml");

static CONFIG: OnceLock<BackofficeConfig> = OnceLock::new();

pub fn config() -> &'static BackofficeConfig {
    CONFIG.get_or_init(|| BackofficeConfig::from_yaml_or_default(CONFIG_YAML))
}
