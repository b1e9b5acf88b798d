//! 页面视图

pub mod home;
pub mod preferences;
pub mod settings;
pub mod settings_page;
