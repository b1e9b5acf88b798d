//!
//! src/backend/mod.rs
//! Backend 层：本地服务
//!
//! Backend 层与 UI 解耦。设置路由解析本身由 hotel-pms-core 提供，
//! 这里只负责界面偏好的持久化。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         pub mod config_service; // 配置服务（JSON 文件 / 内存）与 ConfigError
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 配置服务（ConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     LocalConfigService
//!         存储位置：<config_dir>/hotel-pms/config.json（可用 --config 覆盖）
//!         文件不存在 → 默认配置；读取或解析失败 → 记录警告并使用默认配置
//!
//!     InMemoryConfigService
//!         --ephemeral 模式与测试使用，不落盘
//!
//!     数据流：
//!         用户在偏好设置页按 ←/→
//!             ↓
//!         update/content.rs 修改 PreferencesState
//!             ↓
//!         调用 app.config.save(...)
//!

pub mod config_service;

use std::path::PathBuf;

pub use config_service::{AppConfig, ConfigService, InMemoryConfigService, LocalConfigService};

/// 根据命令行参数选择配置服务
pub fn config_service_for(path: Option<PathBuf>, ephemeral: bool) -> Box<dyn ConfigService> {
    if ephemeral {
        log::info!("Ephemeral mode, preferences will not be persisted");
        return Box::new(InMemoryConfigService::default());
    }

    match path.or_else(LocalConfigService::default_path) {
        Some(path) => {
            let service = LocalConfigService::new(path);
            log::debug!("Preferences file: {}", service.path().display());
            Box::new(service)
        }
        None => {
            log::warn!("No config directory available, preferences will not be persisted");
            Box::new(InMemoryConfigService::default())
        }
    }
}
