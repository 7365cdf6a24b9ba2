//! Direct column and row size changes

use crate::commands::{Cmd, DamageArea};
use crate::messages::GeometryMsg;
use crate::model::GridModel;

pub fn update_geometry(model: &mut GridModel, msg: GeometryMsg) -> Option<Cmd> {
    match msg {
        GeometryMsg::ResizeColumn { index, delta } => resize_column(model, index, delta),
        GeometryMsg::ResizeRow { index, delta } => resize_row(model, index, delta),
    }
}

/// Apply a width delta and repaint only that column
pub(crate) fn resize_column(model: &mut GridModel, index: usize, delta: f64) -> Option<Cmd> {
    if !model.geometry.resize_column(index, delta) {
        tracing::debug!("Ignoring resize of unknown column {}", index);
        return None;
    }
    Some(Cmd::RedrawAreas(vec![DamageArea::Column(index)]))
}

/// Apply a height delta and repaint only that row
pub(crate) fn resize_row(model: &mut GridModel, index: usize, delta: f64) -> Option<Cmd> {
    if !model.geometry.resize_row(index, delta) {
        tracing::debug!("Ignoring resize of unknown row {}", index);
        return None;
    }
    Some(Cmd::RedrawAreas(vec![DamageArea::Row(index)]))
}
