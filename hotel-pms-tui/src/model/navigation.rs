//! 导航状态定义

use super::Page;

/// 导航项 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItemId {
    Home,
    Settings,
    Preferences,
}

impl NavItemId {
    /// 导航项对应的页面
    pub fn page(self) -> Page {
        match self {
            NavItemId::Home => Page::Home,
            NavItemId::Settings => Page::Settings,
            NavItemId::Preferences => Page::Preferences,
        }
    }
}

/// 导航项
#[derive(Debug, Clone)]
pub struct NavItem {
    pub id: NavItemId,
    pub icon: &'static str,
}

/// 导航状态
pub struct NavigationState {
    /// 导航项列表
    pub items: Vec<NavItem>,
    /// 当前选中的索引
    pub selected: usize,
}

impl NavigationState {
    /// 创建默认导航状态
    pub fn new() -> Self {
        Self {
            items: vec![
                NavItem {
                    id: NavItemId::Home,
                    icon: "⌂",
                },
                NavItem {
                    id: NavItemId::Settings,
                    icon: "≡",
                },
                NavItem {
                    id: NavItemId::Preferences,
                    icon: "◐",
                },
            ],
            selected: 0,
        }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    /// 获取当前选中的导航项 ID
    pub fn current_id(&self) -> Option<NavItemId> {
        self.items.get(self.selected).map(|item| item.id)
    }

    /// 让导航高亮跟随页面（页面由内容区跳转时使用）
    pub fn sync_with(&mut self, page: &Page) {
        let id = match page {
            Page::Home => NavItemId::Home,
            Page::Settings | Page::SettingsPage { .. } => NavItemId::Settings,
            Page::Preferences => NavItemId::Preferences,
        };
        if let Some(index) = self.items.iter().position(|item| item.id == id) {
            self.selected = index;
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_is_clamped() {
        let mut nav = NavigationState::new();
        nav.select_previous();
        assert_eq!(nav.selected, 0);

        nav.select_last();
        nav.select_next();
        assert_eq!(nav.current_id(), Some(NavItemId::Preferences));
    }

    #[test]
    fn sync_with_detail_page_highlights_settings() {
        let mut nav = NavigationState::new();
        nav.sync_with(&Page::SettingsPage {
            path: "/settings/general".to_string(),
        });
        assert_eq!(nav.current_id(), Some(NavItemId::Settings));
    }
}
