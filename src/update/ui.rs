//! UI message handlers (error banner expiry)

use std::time::Instant;

use crate::commands::Cmd;
use crate::messages::UiMsg;
use crate::model::GridModel;

pub fn update_ui(model: &mut GridModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::Tick => {
            if model.ui.expire_banner(Instant::now()) {
                Some(Cmd::redraw_banner())
            } else {
                None
            }
        }

        UiMsg::DismissError => model
            .ui
            .error_banner
            .take()
            .map(|_| Cmd::redraw_banner()),
    }
}
