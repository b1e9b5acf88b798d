//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含纯数据结构，不包含任何业务逻辑。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Navigation / Content）
//!         mod navigation;     // 导航栏状态
//!         mod page;           // 页面路由状态
//!
//!         pub mod state;      // 页面数据状态
//!
//!     Page 表示当前应用处于哪个“页面”，只负责标识位置；
//!     State 是各个页面的数据容器，存储选中项、弹窗等会话状态。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、设置目录（SettingsState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/state/settings.rs 中定义：
//!
//!         SettingsState {
//!             catalog: SettingsCatalog,   // 分区与设置项（来自 hotel-pms-core）
//!             section_index: usize,       // 当前分区
//!             item_index: usize,          // 当前设置项
//!             dialog: DialogState,        // 通用弹窗：Closed / Open(分区, 设置项)
//!         }
//!
//!     数据流：
//!         用户在设置页按 Enter
//!             ↓
//!         update/content.rs 调用 app.resolver.resolve(分区, 设置项)
//!             ↓
//!         Navigate(path)   → app.current_page = Page::SettingsPage { path }
//!         OpenDialog(..)   → app.settings.dialog.open(分区, 设置项)
//!
//!     通用弹窗用两态状态机表示，“弹窗打开但没有选中项”这种组合无法被构造。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、弹窗状态（ModalState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     帮助、错误提示等全局弹窗：
//!         - active: Option<Modal>    // None = 无弹窗, Some = 有弹窗
//!         - show_xxx() 方法：显示特定弹窗
//!         - close() 方法：关闭弹窗
//!

mod app;
mod focus;
mod navigation;
mod page;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::{NavItemId, NavigationState};
pub use page::Page;
pub use state::{Modal, ModalState, PreferencesState, SettingsState};
