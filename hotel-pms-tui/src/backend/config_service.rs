//! 配置服务

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::state::Theme;

/// 配置目录名
const APP_DIR: &str = "hotel-pms";
/// 配置文件名
const CONFIG_FILE: &str = "config.json";

fn default_language() -> String {
    "en-US".to_string()
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            language: default_language(),
        }
    }
}

/// 配置读写错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 配置服务 trait
pub trait ConfigService {
    /// 加载配置
    fn load(&self) -> Result<AppConfig, ConfigError>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;
}

/// 本地配置服务（JSON 文件）
///
/// 存储位置：`<config_dir>/hotel-pms/config.json`
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 系统配置目录下的默认路径
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> ConfigError {
        ConfigError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.path.exists() {
            log::info!("No config at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let config = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;
        log::info!("Loaded config from {}", self.path.display());
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let content = serde_json::to_string_pretty(config).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, content).map_err(|e| self.io_error(e))?;
        log::info!("Saved config to {}", self.path.display());
        Ok(())
    }
}

/// 内存配置服务（不落盘，`--ephemeral` 与测试使用）
#[derive(Default)]
pub struct InMemoryConfigService {
    config: RefCell<AppConfig>,
}

impl ConfigService for InMemoryConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        Ok(self.config.borrow().clone())
    }

    fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        *self.config.borrow_mut() = config.clone();
        Ok(())
    }
}
