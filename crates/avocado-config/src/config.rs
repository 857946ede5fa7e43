use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::errors::ConfigError;
use crate::layout::{ProjectLayout, DEFAULT_IOS_DIR, DEFAULT_PLUGINS_DIR};

/// File name of the per-project configuration, relative to the project root
pub const CONFIG_FILE_NAME: &str = "avocado.toml";

/// Environment variable that points at an alternative config file
pub const CONFIG_ENV_VAR: &str = "AVOCADO_CONFIG";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AvocadoConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ios_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugins_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pod_path: Option<String>,
}

impl AvocadoConfig {
    /// Location of the config file for a project.
    ///
    /// Honors an explicit override via `AVOCADO_CONFIG` for tests and isolated
    /// runs; otherwise the file sits at the project root.
    pub fn path(project_root: &Path) -> PathBuf {
        let env_override = std::env::var(CONFIG_ENV_VAR).ok();
        Self::resolve_path(project_root, env_override.as_deref())
    }

    fn resolve_path(project_root: &Path, env_override: Option<&str>) -> PathBuf {
        if let Some(env_path) = env_override {
            let trimmed = env_path.trim();
            if !trimmed.is_empty() {
                return PathBuf::from(trimmed);
            }
        }
        project_root.join(CONFIG_FILE_NAME)
    }

    pub fn load(project_root: &Path) -> Result<Self, ConfigError> {
        Self::load_from(&Self::path(project_root))
    }

    /// Load from an explicit file. A missing file is the default configuration.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("No config at {:?}, using defaults", path);
            return Ok(AvocadoConfig::default());
        }
        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn save(&self, project_root: &Path) -> Result<(), ConfigError> {
        self.save_to(&Self::path(project_root))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "ios-path" => self.ios_path.clone(),
            "plugins-path" => self.plugins_path.clone(),
            "pod-path" => self.pod_path.clone(),
            _ => None,
        }
    }

    /// Set a value by its kebab-case key. Returns false for unknown keys.
    pub fn set(&mut self, key: &str, value: String) -> bool {
        match key {
            "ios-path" => self.ios_path = Some(value),
            "plugins-path" => self.plugins_path = Some(value),
            "pod-path" => self.pod_path = Some(value),
            _ => return false,
        }
        true
    }

    pub fn is_empty(&self) -> bool {
        self.ios_path.is_none() && self.plugins_path.is_none() && self.pod_path.is_none()
    }

    pub fn values_iter(&self) -> Vec<(&str, String)> {
        let mut values = Vec::new();
        if let Some(ref val) = self.ios_path {
            values.push(("ios-path", val.clone()));
        }
        if let Some(ref val) = self.plugins_path {
            values.push(("plugins-path", val.clone()));
        }
        if let Some(ref val) = self.pod_path {
            values.push(("pod-path", val.clone()));
        }
        values
    }

    /// Resolve the project layout for `project_root` using the configured
    /// directories, falling back to `ios/` and `node_modules/`.
    pub fn layout(&self, project_root: &Path) -> ProjectLayout {
        ProjectLayout::new(project_root)
            .with_ios_dir(self.ios_path.as_deref().unwrap_or(DEFAULT_IOS_DIR))
            .with_plugins_dir(self.plugins_path.as_deref().unwrap_or(DEFAULT_PLUGINS_DIR))
    }
}
