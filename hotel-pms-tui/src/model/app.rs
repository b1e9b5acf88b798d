//! 应用主状态结构

use hotel_pms_core::SettingsResolver;

use super::{FocusPanel, ModalState, NavigationState, Page, PreferencesState, SettingsState};
use crate::backend::ConfigService;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 设置路由解析器（内置路由表，只读）
    pub resolver: SettingsResolver<'static>,

    // === 各页面状态 ===
    /// 设置目录页面状态
    pub settings: SettingsState,
    /// 偏好设置页面状态
    pub preferences: PreferencesState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 配置服务
    pub config: Box<dyn ConfigService>,
}

impl App {
    /// 创建新的应用实例，并从配置服务恢复偏好
    pub fn new(config: Box<dyn ConfigService>) -> Self {
        let preferences = match config.load() {
            Ok(app_config) => PreferencesState::from_config(&app_config),
            Err(e) => {
                log::warn!("Failed to load config, using defaults: {e}");
                PreferencesState::default()
            }
        };

        let app = Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_page: Page::Home,
            status_message: None,
            resolver: SettingsResolver::builtin(),
            settings: SettingsState::default(),
            preferences,
            modal: ModalState::new(),
            config,
        };
        app.apply_preferences();
        app
    }

    /// 将偏好应用到全局主题与语言
    pub fn apply_preferences(&self) {
        crate::view::theme::set_theme(self.preferences.theme);
        crate::i18n::set_language(self.preferences.language);
    }

    /// 切换页面，同步导航高亮并清除状态消息
    pub fn go_to(&mut self, page: Page) {
        log::debug!("Page change: {:?} -> {:?}", self.current_page, page);
        self.navigation.sync_with(&page);
        self.current_page = page;
        self.clear_status();
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
