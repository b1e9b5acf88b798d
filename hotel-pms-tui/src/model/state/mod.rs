//! 页面状态模块
//!
//! 定义各个页面的状态数据结构

mod modal;
mod preferences;
mod settings;

pub use modal::{Modal, ModalState};
pub use preferences::{PreferenceItem, PreferencesState, Theme};
pub use settings::SettingsState;
