use serde::{Deserialize, Serialize};

/// Turns a settings document into text and back. Errors describe what is
/// wrong with the text only; the manager prefixes them with where the text
/// came from.
pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

/// Settings stored as YAML. Missing fields fall back to `#[serde(default)]`
/// on the settings types, so older files keep loading after new options
/// appear.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("cannot encode settings as YAML: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        if content.trim().is_empty() {
            return Err("settings file is empty".to_string());
        }
        serde_yaml_ng::from_str(content).map_err(|e| format!("invalid YAML: {}", e))
    }
}
