//! 设置目录页面状态

use hotel_pms_core::{DialogState, SettingsCatalog, SettingsItem, SettingsSection};

/// 设置目录页面状态
///
/// 选中项用 (分区索引, 条目索引) 表示；通用弹窗状态属于本页面会话。
#[derive(Debug)]
pub struct SettingsState {
    /// 设置目录（启动时加载，只读）
    pub catalog: SettingsCatalog,
    /// 当前分区索引
    pub section_index: usize,
    /// 当前分区内的条目索引
    pub item_index: usize,
    /// 通用弹窗（无专属页面的设置项）
    pub dialog: DialogState,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self::new(SettingsCatalog::builtin())
    }
}

impl SettingsState {
    pub fn new(catalog: SettingsCatalog) -> Self {
        Self {
            catalog,
            section_index: 0,
            item_index: 0,
            dialog: DialogState::default(),
        }
    }

    fn section_count(&self) -> usize {
        self.catalog.sections().len()
    }

    fn item_count(&self) -> usize {
        self.current_section().map_or(0, |section| section.items.len())
    }

    /// 获取当前分区
    pub fn current_section(&self) -> Option<&SettingsSection> {
        self.catalog.sections().get(self.section_index)
    }

    /// 获取当前设置项
    pub fn current_item(&self) -> Option<&SettingsItem> {
        self.current_section()
            .and_then(|section| section.items.get(self.item_index))
    }

    /// 当前选中的 (分区 ID, 设置项标题)
    pub fn selected_pair(&self) -> Option<(&str, &str)> {
        let section = self.current_section()?;
        let item = section.items.get(self.item_index)?;
        Some((section.id.as_str(), item.title.as_str()))
    }

    /// 选择上一个设置项（循环）
    pub fn select_previous(&mut self) {
        let count = self.item_count();
        if count == 0 {
            return;
        }
        self.item_index = if self.item_index == 0 {
            count - 1
        } else {
            self.item_index - 1
        };
    }

    /// 选择下一个设置项（循环）
    pub fn select_next(&mut self) {
        let count = self.item_count();
        if count == 0 {
            return;
        }
        self.item_index = (self.item_index + 1) % count;
    }

    pub fn select_first(&mut self) {
        self.item_index = 0;
    }

    pub fn select_last(&mut self) {
        self.item_index = self.item_count().saturating_sub(1);
    }

    /// 切换到上一个分区（循环），条目回到第一项
    pub fn select_previous_section(&mut self) {
        let count = self.section_count();
        if count == 0 {
            return;
        }
        self.section_index = if self.section_index == 0 {
            count - 1
        } else {
            self.section_index - 1
        };
        self.item_index = 0;
    }

    /// 切换到下一个分区（循环），条目回到第一项
    pub fn select_next_section(&mut self) {
        let count = self.section_count();
        if count == 0 {
            return;
        }
        self.section_index = (self.section_index + 1) % count;
        self.item_index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_item_with_dialog_closed() {
        let state = SettingsState::default();
        assert_eq!(state.selected_pair(), Some(("general", "Hotel Information")));
        assert!(!state.dialog.is_open());
    }

    #[test]
    fn item_selection_wraps_within_section() {
        let mut state = SettingsState::default();
        state.select_previous();
        assert_eq!(state.selected_pair(), Some(("general", "Branding")));

        state.select_next();
        assert_eq!(state.selected_pair(), Some(("general", "Hotel Information")));
    }

    #[test]
    fn section_switch_resets_item() {
        let mut state = SettingsState::default();
        state.select_last();
        state.select_next_section();
        assert_eq!(state.selected_pair(), Some(("booking", "Booking Rules")));

        state.select_previous_section();
        state.select_previous_section();
        assert_eq!(state.current_section().map(|s| s.id.as_str()), Some("integrations"));
    }

    #[test]
    fn empty_catalog_has_no_selection() {
        let mut state = SettingsState::new(SettingsCatalog::default());
        state.select_next();
        state.select_next_section();
        assert_eq!(state.selected_pair(), None);
    }
}
