//! Cell, row and grid selection

use crate::commands::Cmd;
use crate::messages::SelectionMsg;
use crate::model::GridModel;

pub fn update_selection(model: &mut GridModel, msg: SelectionMsg) -> Option<Cmd> {
    let bounds = model.bounds();
    match msg {
        SelectionMsg::SelectCell { row, col, extend } => {
            if !model.selection.select_cell(row, col, extend, bounds) {
                tracing::debug!("Ignoring click outside grid at ({}, {})", row, col);
                return None;
            }
        }
        SelectionMsg::SelectRow(row) => {
            if !model.selection.select_row(row, bounds) {
                tracing::debug!("Ignoring click on unknown row {}", row);
                return None;
            }
        }
        SelectionMsg::SelectAll => model.selection.select_all(bounds),
        SelectionMsg::Clear => {
            if model.selection.is_empty() {
                return None;
            }
            model.selection.clear();
        }
    }
    Some(Cmd::redraw_cells())
}
