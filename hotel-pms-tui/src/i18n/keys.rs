//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：所有弹窗（Modal）的内容都放在 modal 下
//! 3. **页面内容归对应页面**：如 `home.*`, `settings.*`
//! 4. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 5. **键盘提示归 `hints.*`**：按键名称和操作提示
//!
//! 设置目录中的分区、条目标题属于配置数据，不在此翻译。

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 导航栏文本
    pub nav: NavTexts,
    /// 主页文本
    pub home: HomeTexts,
    /// 设置页面文本
    pub settings: SettingsTexts,
    /// 设置子页面文本
    pub settings_page: SettingsPageTexts,
    /// 偏好设置页面文本
    pub preferences: PreferencesTexts,
    /// 弹窗文本（所有弹窗的内容）
    pub modal: ModalTexts,
    /// 状态栏文本
    pub status_bar: StatusBarTexts,
    /// 帮助页面文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub back: &'static str,
    pub close: &'static str,
    pub open: &'static str,
    pub quit: &'static str,
    pub select: &'static str,
    pub error: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    /// 按键名称
    pub keys: KeyNames,
    /// 动作描述
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub arrows_lr: &'static str, // "←→"
    pub arrows_ud: &'static str, // "↑↓"
}

/// 动作描述（用于组合提示）
pub struct ActionTexts {
    pub navigate: &'static str,
    pub switch_option: &'static str,
    pub switch_panel: &'static str,
    pub switch_section: &'static str,
    pub move_up_down: &'static str,
}

// ============================================================================
// 导航栏
// ============================================================================

/// 导航栏文本
pub struct NavTexts {
    pub title: &'static str,
    pub home: &'static str,
    pub settings: &'static str,
    pub preferences: &'static str,
}

// ============================================================================
// 页面文本
// ============================================================================

/// 主页文本
pub struct HomeTexts {
    pub welcome: &'static str,
    pub welcome_desc: &'static str,
    pub sections: &'static str,
    pub items: &'static str,
    pub dedicated_pages: &'static str,
    pub open_settings_hint: &'static str,
}

/// 设置页面文本
pub struct SettingsTexts {
    pub title: &'static str,
    pub no_sections: &'static str,
    pub dedicated_page: &'static str,
    pub dialog_only: &'static str,
}

/// 设置子页面文本（由路由解析跳转而来）
pub struct SettingsPageTexts {
    pub title: &'static str,
    pub path: &'static str,
    pub section: &'static str,
    pub item: &'static str,
    pub placeholder: &'static str,
    pub unknown_path: &'static str,
}

/// 偏好设置页面文本
pub struct PreferencesTexts {
    pub title: &'static str,
    /// 主题设置
    pub theme: ThemeTexts,
    /// 语言设置
    pub language: LanguageTexts,
}

pub struct ThemeTexts {
    pub label: &'static str,
    pub dark: &'static str,
    pub light: &'static str,
}

pub struct LanguageTexts {
    pub label: &'static str,
    pub description: &'static str,
}

// ============================================================================
// 弹窗文本
// ============================================================================

/// 弹窗文本（所有弹窗的内容都在这里）
pub struct ModalTexts {
    /// 设置项通用弹窗（无专属页面时使用）
    pub settings_dialog: SettingsDialogTexts,
}

/// 设置项通用弹窗
pub struct SettingsDialogTexts {
    pub section: &'static str,
    pub item: &'static str,
    pub no_dedicated_page: &'static str,
    pub unknown_item: &'static str,
    pub close_hint: &'static str,
}

// ============================================================================
// 其他组件
// ============================================================================

/// 状态栏文本
pub struct StatusBarTexts {
    pub ready: &'static str,
    pub preferences_saved: &'static str,
    pub save_failed: &'static str,
}

/// 帮助页面文本
pub struct HelpTexts {
    pub title: &'static str,
    pub global_shortcuts: &'static str,
    pub settings_shortcuts: &'static str,
    pub close_hint: &'static str,
    /// 快捷键动作描述
    pub actions: HelpActionTexts,
}

/// 帮助页面快捷键动作描述
pub struct HelpActionTexts {
    pub switch_panel: &'static str,
    pub move_up_down: &'static str,
    pub switch_section: &'static str,
    pub confirm: &'static str,
    pub back_cancel: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}
