//! 内容面板更新逻辑

use hotel_pms_core::SettingsAction;

use crate::i18n::t;
use crate::message::ContentMessage;
use crate::model::{App, NavItemId, Page};

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match app.current_page {
        Page::Home => update_home(app, &msg),
        Page::Settings => update_settings(app, &msg),
        Page::Preferences => update_preferences(app, &msg),
        // 设置子页面只响应返回（GoBack）
        Page::SettingsPage { .. } => {}
    }
}

/// 首页：Enter 进入设置目录
fn update_home(app: &mut App, msg: &ContentMessage) {
    if *msg == ContentMessage::Confirm {
        app.go_to(NavItemId::Settings.page());
    }
}

/// 设置目录页面
fn update_settings(app: &mut App, msg: &ContentMessage) {
    // 通用弹窗打开时，列表不响应
    if app.settings.dialog.is_open() {
        return;
    }

    match msg {
        ContentMessage::SelectPrevious => app.settings.select_previous(),
        ContentMessage::SelectNext => app.settings.select_next(),
        ContentMessage::SelectFirst => app.settings.select_first(),
        ContentMessage::SelectLast => app.settings.select_last(),
        ContentMessage::PrevSection => app.settings.select_previous_section(),
        ContentMessage::NextSection => app.settings.select_next_section(),
        ContentMessage::Confirm => open_selected_setting(app),
        ContentMessage::TogglePrev | ContentMessage::ToggleNext => {}
    }
}

/// 解析当前设置项并执行结果：跳转子页面或打开通用弹窗
fn open_selected_setting(app: &mut App) {
    let Some((section_id, item_title)) = app.settings.selected_pair() else {
        return;
    };
    let action = app.resolver.resolve(section_id, item_title);

    match action {
        SettingsAction::Navigate { path } => {
            log::info!("Opening settings page {path}");
            app.go_to(Page::SettingsPage { path });
        }
        SettingsAction::OpenDialog {
            section_id,
            item_title,
        } => {
            app.settings.dialog.open(section_id, item_title);
        }
    }
}

/// 偏好设置页面
fn update_preferences(app: &mut App, msg: &ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => app.preferences.select_previous(),
        ContentMessage::SelectNext => app.preferences.select_next(),
        ContentMessage::SelectFirst => app.preferences.selected_index = 0,
        ContentMessage::SelectLast => {
            app.preferences.selected_index = crate::model::state::PreferenceItem::all().len() - 1;
        }
        ContentMessage::TogglePrev => {
            app.preferences.toggle_prev();
            save_preferences(app);
        }
        ContentMessage::ToggleNext | ContentMessage::Confirm => {
            app.preferences.toggle_next();
            save_preferences(app);
        }
        ContentMessage::PrevSection | ContentMessage::NextSection => {}
    }
}

/// 应用并保存偏好
fn save_preferences(app: &mut App) {
    app.apply_preferences();

    let texts = t();
    match app.config.save(&app.preferences.to_config()) {
        Ok(()) => app.set_status(texts.status_bar.preferences_saved),
        Err(e) => {
            log::error!("Failed to save preferences: {e}");
            app.set_status(texts.status_bar.save_failed);
            app.modal.show_error(texts.common.error, &e.to_string());
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use hotel_pms_core::DialogState;

    use super::*;
    use crate::backend::config_service::ConfigError;
    use crate::backend::{AppConfig, ConfigService};
    use crate::model::state::{Modal, Theme};
    use crate::update::test_support;

    fn settings_app() -> App {
        let mut app = test_support::app();
        app.go_to(Page::Settings);
        app
    }

    /// 选中指定设置项
    fn select(app: &mut App, section_id: &str, item_title: &str) {
        let section_index = app
            .settings
            .catalog
            .sections()
            .iter()
            .position(|s| s.id == section_id)
            .unwrap();
        let item_index = app.settings.catalog.sections()[section_index]
            .items
            .iter()
            .position(|i| i.title == item_title)
            .unwrap();
        app.settings.section_index = section_index;
        app.settings.item_index = item_index;
    }

    #[test]
    fn home_confirm_opens_settings() {
        let mut app = test_support::app();
        update(&mut app, ContentMessage::Confirm);
        assert_eq!(app.current_page, Page::Settings);
        assert_eq!(app.navigation.current_id(), Some(NavItemId::Settings));
    }

    #[test]
    fn mapped_item_navigates() {
        let mut app = settings_app();
        select(&mut app, "security", "User Roles");

        update(&mut app, ContentMessage::Confirm);

        assert_eq!(
            app.current_page,
            Page::SettingsPage {
                path: "/settings/user-roles".to_string()
            }
        );
        assert_eq!(app.settings.dialog, DialogState::Closed);
    }

    #[test]
    fn unmapped_item_opens_dialog() {
        let mut app = settings_app();
        select(&mut app, "rooms", "Housekeeping");

        update(&mut app, ContentMessage::Confirm);

        assert_eq!(app.current_page, Page::Settings);
        assert_eq!(
            app.settings.dialog.selection(),
            Some(("rooms", "Housekeeping"))
        );
    }

    #[test]
    fn list_is_frozen_while_dialog_open() {
        let mut app = settings_app();
        select(&mut app, "rooms", "Housekeeping");
        update(&mut app, ContentMessage::Confirm);

        update(&mut app, ContentMessage::NextSection);
        update(&mut app, ContentMessage::SelectNext);

        assert_eq!(app.settings.selected_pair(), Some(("rooms", "Housekeeping")));
    }

    #[test]
    fn section_keys_move_between_sections() {
        let mut app = settings_app();
        update(&mut app, ContentMessage::NextSection);
        update(&mut app, ContentMessage::SelectLast);
        assert_eq!(app.settings.selected_pair(), Some(("booking", "Deposits")));
    }

    #[test]
    fn preferences_toggle_is_saved() {
        let mut app = test_support::app();
        app.go_to(Page::Preferences);

        update(&mut app, ContentMessage::ToggleNext);

        assert_eq!(app.preferences.theme, Theme::Light);
        assert_eq!(app.config.load().unwrap().theme, Theme::Light);
        assert!(app.status_message.is_some());

        update(&mut app, ContentMessage::TogglePrev);
        assert_eq!(app.config.load().unwrap().theme, Theme::Dark);
    }

    struct FailingConfigService;

    impl ConfigService for FailingConfigService {
        fn load(&self) -> Result<AppConfig, ConfigError> {
            Ok(AppConfig::default())
        }

        fn save(&self, _config: &AppConfig) -> Result<(), ConfigError> {
            Err(ConfigError::Io {
                path: "config.json".into(),
                source: std::io::Error::other("read-only"),
            })
        }
    }

    #[test]
    fn failed_save_shows_error() {
        let mut app = App::new(Box::new(FailingConfigService));
        app.go_to(Page::Preferences);

        update(&mut app, ContentMessage::ToggleNext);

        assert!(matches!(app.modal.active, Some(Modal::Error { .. })));
    }
}
