//! 导航更新逻辑

use crate::message::NavigationMessage;
use crate::model::App;

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => app.navigation.select_previous(),
        NavigationMessage::SelectNext => app.navigation.select_next(),
        NavigationMessage::SelectFirst => app.navigation.select_first(),
        NavigationMessage::SelectLast => app.navigation.select_last(),

        NavigationMessage::Confirm => {
            if let Some(id) = app.navigation.current_id() {
                app.go_to(id.page());
            }
        }
    }
}
