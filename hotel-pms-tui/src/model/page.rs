//! 页面状态定义

/// 页面枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    /// 首页
    #[default]
    Home,
    /// 设置目录
    Settings,
    /// 设置子页面（路由解析为 Navigate 时进入）
    SettingsPage { path: String },
    /// 界面偏好
    Preferences,
}

impl Page {
    /// 是否是详情页面（需要返回按钮）
    pub fn is_detail_page(&self) -> bool {
        matches!(self, Page::SettingsPage { .. })
    }

    /// 详情页返回的列表页
    pub fn parent(&self) -> Option<Page> {
        match self {
            Page::SettingsPage { .. } => Some(Page::Settings),
            _ => None,
        }
    }
}
