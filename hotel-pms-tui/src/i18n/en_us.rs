//! English (United States)

use super::keys::{
    ActionTexts, CommonTexts, HelpActionTexts, HelpTexts, HintTexts, HomeTexts, KeyNames,
    LanguageTexts, ModalTexts, NavTexts, PreferencesTexts, SettingsDialogTexts,
    SettingsPageTexts, SettingsTexts, StatusBarTexts, ThemeTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Hotel PMS Console",
        back: "Back",
        close: "Close",
        open: "Open",
        quit: "Quit",
        select: "Select",
        error: "Error",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            arrows_lr: "←→",
            arrows_ud: "↑↓",
        },
        actions: ActionTexts {
            navigate: "Navigate",
            switch_option: "Switch",
            switch_panel: "Switch panel",
            switch_section: "Section",
            move_up_down: "Move",
        },
    },

    nav: NavTexts {
        title: "Menu",
        home: "Home",
        settings: "Settings",
        preferences: "Preferences",
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    home: HomeTexts {
        welcome: "Welcome to the Hotel PMS Console",
        welcome_desc: "Browse and configure property settings",
        sections: "settings sections",
        items: "settings items",
        dedicated_pages: "dedicated pages",
        open_settings_hint: "Press Enter to open Settings",
    },

    settings: SettingsTexts {
        title: "Settings",
        no_sections: "No settings sections configured",
        dedicated_page: "page",
        dialog_only: "details",
    },

    settings_page: SettingsPageTexts {
        title: "Settings Page",
        path: "Path",
        section: "Section",
        item: "Item",
        placeholder: "This page is provided by its own settings editor.",
        unknown_path: "No catalog item points to this path",
    },

    preferences: PreferencesTexts {
        title: "Preferences",
        theme: ThemeTexts {
            label: "Theme",
            dark: "Dark",
            light: "Light",
        },
        language: LanguageTexts {
            label: "Language",
            description: "Choose your preferred language",
        },
    },

    // ========================================================================
    // 弹窗文本
    // ========================================================================
    modal: ModalTexts {
        settings_dialog: SettingsDialogTexts {
            section: "Section",
            item: "Item",
            no_dedicated_page: "This setting has no dedicated page yet.",
            unknown_item: "Not found in the settings catalog",
            close_hint: "Press Esc or Enter to close",
        },
    },

    // ========================================================================
    // 其他组件
    // ========================================================================
    status_bar: StatusBarTexts {
        ready: "Ready",
        preferences_saved: "Preferences saved",
        save_failed: "Failed to save preferences",
    },

    help: HelpTexts {
        title: "Help",
        global_shortcuts: "Global shortcuts",
        settings_shortcuts: "Settings page",
        close_hint: "Press Esc to close the help",
        actions: HelpActionTexts {
            switch_panel: "Switch panel",
            move_up_down: "Move up/down",
            switch_section: "Previous/next section",
            confirm: "Open item",
            back_cancel: "Back/Cancel",
            help: "Show help",
            quit: "Quit",
        },
    },
};
