//! Inline cell editing

use crate::commands::Cmd;
use crate::messages::EditMsg;
use crate::model::{column_at, CellEditState, CellPosition, GridModel};

use super::sync::apply_field_update;

pub fn update_edit(model: &mut GridModel, msg: EditMsg) -> Option<Cmd> {
    match msg {
        EditMsg::Start { row, col } => {
            let column = column_at(col)?;
            let lead = model.leads.get(row)?;
            let state = CellEditState {
                position: CellPosition::new(row, col),
                lead_id: lead.id.clone(),
                field: column.field,
                original: lead.get(column.field).to_string(),
            };
            model.edit.start(state);
            Some(Cmd::redraw_cells())
        }

        EditMsg::Commit(value) => {
            let was_editing = model.edit.is_editing();
            match model.edit.commit(value) {
                Some(edit) => {
                    let sync = apply_field_update(model, edit.lead_id, edit.field, edit.new_value);
                    Some(Cmd::batch(vec![Cmd::redraw_cells(), sync]))
                }
                None if was_editing => Some(Cmd::redraw_cells()),
                None => None,
            }
        }

        EditMsg::Cancel => model.edit.cancel().map(|_| Cmd::redraw_cells()),
    }
}
