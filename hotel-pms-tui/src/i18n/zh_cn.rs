//! 简体中文

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
        app_name: "酒店管理控制台",
        back: "返回",
        close: "关闭",
        open: "打开",
        quit: "退出",
        select: "选择",
        error: "错误",
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
            navigate: "导航",
            switch_option: "切换选项",
            switch_panel: "切换面板",
            switch_section: "切换分区",
            move_up_down: "上下移动",
        },
    },

    nav: NavTexts {
        title: "菜单",
        home: "主页",
        settings: "设置",
        preferences: "偏好",
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    home: HomeTexts {
        welcome: "欢迎使用酒店管理控制台",
        welcome_desc: "浏览并配置酒店设置",
        sections: "个设置分区",
        items: "个设置项",
        dedicated_pages: "个专属页面",
        open_settings_hint: "按 Enter 打开设置",
    },

    settings: SettingsTexts {
        title: "设置",
        no_sections: "尚未配置任何设置分区",
        dedicated_page: "页面",
        dialog_only: "详情",
    },

    settings_page: SettingsPageTexts {
        title: "设置页面",
        path: "路径",
        section: "分区",
        item: "设置项",
        placeholder: "此页面由对应的设置编辑器提供。",
        unknown_path: "没有设置项指向此路径",
    },

    preferences: PreferencesTexts {
        title: "偏好设置",
        theme: ThemeTexts {
            label: "主题",
            dark: "深色",
            light: "浅色",
        },
        language: LanguageTexts {
            label: "语言",
            description: "选择界面语言",
        },
    },

    // ========================================================================
    // 弹窗文本
    // ========================================================================
    modal: ModalTexts {
        settings_dialog: SettingsDialogTexts {
            section: "分区",
            item: "设置项",
            no_dedicated_page: "该设置项暂无专属页面。",
            unknown_item: "设置目录中不存在此项",
            close_hint: "按 Esc 或 Enter 关闭",
        },
    },

    // ========================================================================
    // 其他组件
    // ========================================================================
    status_bar: StatusBarTexts {
        ready: "就绪",
        preferences_saved: "偏好设置已保存",
        save_failed: "偏好设置保存失败",
    },

    help: HelpTexts {
        title: "帮助",
        global_shortcuts: "全局快捷键",
        settings_shortcuts: "设置页面",
        close_hint: "按 Esc 关闭帮助",
        actions: HelpActionTexts {
            switch_panel: "切换面板",
            move_up_down: "上下移动",
            switch_section: "上一个/下一个分区",
            confirm: "打开设置项",
            back_cancel: "返回/取消",
            help: "显示帮助",
            quit: "退出",
        },
    },
};
