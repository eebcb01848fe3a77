mod config;
mod window_config;

pub(crate) use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use config::{get_config_manager, Config};
pub use window_config::WindowConfig;
