//! 内容面板消息
//!
//! 处理内容面板中的操作，如列表选择、设置项打开等

/// 内容面板消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 确认选择（打开设置项或执行操作）
    Confirm,

    // ========== 设置目录专用 ==========
    /// 上一个分区
    PrevSection,
    /// 下一个分区
    NextSection,

    // ========== 偏好设置专用 ==========
    /// 切换到上一个值
    TogglePrev,
    /// 切换到下一个值
    ToggleNext,
}
