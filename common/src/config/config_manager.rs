use std::path::Path;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::log;
use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads, validates and caches a config value behind a content provider.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl AsRef<Path>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path.as_ref()),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Mutex::new(None),
            config_content_provider,
            config_serializer,
        }
    }

    /// Stored config, or the default when nothing has been stored yet.
    pub fn get_config(&self) -> Result<TConfig, String> {
        Ok(self.load()?.unwrap_or_default())
    }

    /// Like [`get_config`](Self::get_config), but persists the default on first run.
    pub fn load_or_init(&self) -> Result<TConfig, String> {
        if let Some(config) = self.load()? {
            return Ok(config);
        }

        let config = TConfig::default();
        self.set_config(&config)?;
        log!("No config found, wrote defaults");
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;

        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self.lock()?;
        *current = Some(config.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<TConfig>, String> {
        let mut current = self.lock()?;

        if let Some(config) = current.as_ref() {
            return Ok(Some(config.clone()));
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(None);
        };

        let config = self.config_serializer.deserialize(&config_data)?;

        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(Some(config))
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<TConfig>>, String> {
        self.config
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InMemoryConfigProvider;

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    struct SampleConfig {
        name: String,
        count: u32,
    }

    impl Validate for SampleConfig {
        fn validate(&self) -> Result<(), String> {
            if self.count > 10 {
                return Err("count must not exceed 10".to_string());
            }
            Ok(())
        }
    }

    fn manager(provider: InMemoryConfigProvider) -> ConfigManager<InMemoryConfigProvider, SampleConfig> {
        ConfigManager::new(provider, YamlConfigSerializer::new())
    }

    #[test]
    fn test_missing_config_yields_default() {
        let manager = manager(InMemoryConfigProvider::default());
        assert_eq!(manager.get_config().unwrap(), SampleConfig::default());
    }

    #[test]
    fn test_load_or_init_writes_default() {
        let provider = InMemoryConfigProvider::default();
        let manager = manager(provider);
        manager.load_or_init().unwrap();
        let stored = manager.config_content_provider.get_config_content().unwrap();
        assert!(stored.is_some());
    }

    #[test]
    fn test_stored_config_is_parsed() {
        let manager = manager(InMemoryConfigProvider::with_content("name: snake\ncount: 3\n"));
        let config = manager.get_config().unwrap();
        assert_eq!(config.name, "snake");
        assert_eq!(config.count, 3);
    }

    #[test]
    fn test_invalid_stored_config_is_rejected() {
        let manager = manager(InMemoryConfigProvider::with_content("name: snake\ncount: 30\n"));
        let result = manager.get_config();
        assert!(result.unwrap_err().contains("count must not exceed 10"));
    }

    #[test]
    fn test_set_config_rejects_invalid() {
        let manager = manager(InMemoryConfigProvider::default());
        let config = SampleConfig { name: "x".to_string(), count: 11 };
        assert!(manager.set_config(&config).is_err());
        assert_eq!(manager.get_config().unwrap(), SampleConfig::default());
    }

    #[test]
    fn test_file_provider_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let manager: ConfigManager<FileContentConfigProvider, SampleConfig> =
            ConfigManager::from_yaml_file(&path);

        let config = SampleConfig { name: "file".to_string(), count: 2 };
        manager.set_config(&config).unwrap();

        let reloaded: ConfigManager<FileContentConfigProvider, SampleConfig> =
            ConfigManager::from_yaml_file(&path);
        assert_eq!(reloaded.get_config().unwrap(), config);
    }
}
