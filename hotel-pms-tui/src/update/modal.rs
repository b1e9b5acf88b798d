//! 弹窗更新逻辑

use crate::message::ModalMessage;
use crate::model::App;

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close => close_top(app),
    }
}

/// 关闭最上层的弹窗：全局弹窗优先于设置项通用弹窗
pub fn close_top(app: &mut App) {
    if app.modal.is_open() {
        app.modal.close();
    } else {
        app.settings.dialog.close();
    }
}
