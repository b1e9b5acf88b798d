//! 偏好设置页面状态

use serde::{Deserialize, Serialize};

use crate::backend::AppConfig;
use crate::i18n::Language;

/// 主题枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// 获取下一个主题
    #[must_use]
    pub fn next(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// 获取上一个主题
    #[must_use]
    pub fn prev(self) -> Theme {
        self.next() // 只有两个选项，prev 和 next 相同
    }
}

/// 偏好项枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceItem {
    Theme,
    Language,
}

impl PreferenceItem {
    /// 获取所有偏好项
    pub fn all() -> &'static [PreferenceItem] {
        &[PreferenceItem::Theme, PreferenceItem::Language]
    }

    /// 从索引获取偏好项
    pub fn from_index(index: usize) -> Option<PreferenceItem> {
        Self::all().get(index).copied()
    }
}

/// 偏好设置页面状态
#[derive(Debug, Default)]
pub struct PreferencesState {
    /// 当前选中的偏好项索引
    pub selected_index: usize,
    /// 当前主题
    pub theme: Theme,
    /// 当前语言
    pub language: Language,
}

impl PreferencesState {
    /// 从配置恢复；未知语言代码回退到默认语言
    pub fn from_config(config: &AppConfig) -> Self {
        let language = Language::from_code(&config.language).unwrap_or_else(|| {
            log::warn!("Unknown language code in config: {}", config.language);
            Language::default()
        });
        Self {
            selected_index: 0,
            theme: config.theme,
            language,
        }
    }

    /// 导出为配置
    pub fn to_config(&self) -> AppConfig {
        AppConfig {
            theme: self.theme,
            language: self.language.code().to_string(),
        }
    }

    fn item_count() -> usize {
        PreferenceItem::all().len()
    }

    /// 选择上一个偏好项
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = Self::item_count() - 1;
        }
    }

    /// 选择下一个偏好项
    pub fn select_next(&mut self) {
        if self.selected_index < Self::item_count() - 1 {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
    }

    /// 获取当前选中的偏好项
    pub fn current_item(&self) -> Option<PreferenceItem> {
        PreferenceItem::from_index(self.selected_index)
    }

    /// 切换当前偏好项到下一个值
    pub fn toggle_next(&mut self) {
        match self.current_item() {
            Some(PreferenceItem::Theme) => self.theme = self.theme.next(),
            Some(PreferenceItem::Language) => self.language = self.language.next(),
            None => {}
        }
    }

    /// 切换当前偏好项到上一个值
    pub fn toggle_prev(&mut self) {
        match self.current_item() {
            Some(PreferenceItem::Theme) => self.theme = self.theme.prev(),
            Some(PreferenceItem::Language) => self.language = self.language.prev(),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_selected_item_only() {
        let mut prefs = PreferencesState::default();
        prefs.toggle_next();
        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(prefs.language, Language::EnUs);

        prefs.select_next();
        prefs.toggle_prev();
        assert_eq!(prefs.language, Language::ZhCn);
    }

    #[test]
    fn config_round_trip() {
        let prefs = PreferencesState {
            selected_index: 1,
            theme: Theme::Light,
            language: Language::ZhCn,
        };
        let restored = PreferencesState::from_config(&prefs.to_config());
        assert_eq!(restored.theme, Theme::Light);
        assert_eq!(restored.language, Language::ZhCn);
        assert_eq!(restored.selected_index, 0);
    }

    #[test]
    fn unknown_language_falls_back() {
        let config = AppConfig {
            theme: Theme::Dark,
            language: "xx".to_string(),
        };
        assert_eq!(PreferencesState::from_config(&config).language, Language::EnUs);
    }
}
