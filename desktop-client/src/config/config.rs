use common::config::Validate;
use common::engine::GameSettings;
use serde::{Deserialize, Serialize};

use super::{ConfigManager, FileContentConfigProvider, WindowConfig, YamlConfigSerializer};

const CONFIG_FILE_NAME: &str = "wrap_snake_config.yaml";
const MAX_SCORE_HISTORY: u32 = 100;

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub game: GameSettings,
    #[serde(default)]
    pub window: WindowConfig,
    pub score_history_size: u32,
    #[serde(default)]
    pub log_prefix: Option<String>,
    #[serde(default)]
    pub verbose_logging: bool,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.window.validate()?;
        if !(1..=MAX_SCORE_HISTORY).contains(&self.score_history_size) {
            return Err(format!(
                "score_history_size must be between 1 and {}",
                MAX_SCORE_HISTORY
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameSettings::default(),
            window: WindowConfig::default(),
            score_history_size: 10,
            log_prefix: None,
            verbose_logging: false,
        }
    }
}
