//! Pointer-driven resize gestures

use crate::commands::{Cmd, DamageArea};
use crate::messages::ResizeMsg;
use crate::model::{GridModel, ResizeController, ResizeTarget};

use super::geometry::{resize_column, resize_row};

pub fn update_resize(model: &mut GridModel, msg: ResizeMsg) -> Option<Cmd> {
    match msg {
        ResizeMsg::Begin {
            target,
            pointer,
            extent,
            header,
        } => {
            // One gesture per grid; a new press replaces a dangling drag
            if let Some(previous) = model.resize.take() {
                if previous.is_dragging() {
                    tracing::debug!(
                        "New resize gesture on {:?} replaces drag on {:?}",
                        target,
                        previous.target()
                    );
                }
            }

            let bounds = model.resize_bounds_for(target, header);
            let mut controller = ResizeController::new(target, bounds);
            controller.begin(pointer, extent);
            model.resize = Some(controller);
            Some(Cmd::RedrawAreas(vec![DamageArea::Handle]))
        }

        ResizeMsg::Move { pointer } => {
            let controller = model.resize.as_mut()?;
            controller.pointer_move(pointer)?;
            let wanted = controller.tracked_size()?;
            // Size the element from the tracked size so movement under the
            // geometry floor must be undone before it grows again
            match controller.target() {
                ResizeTarget::Column(index) => {
                    let current = model.geometry.column_width(index)?;
                    resize_column(model, index, wanted - current)
                }
                ResizeTarget::Row(index) => {
                    let current = model.geometry.row_height(index);
                    resize_row(model, index, wanted - current)
                }
            }
        }

        ResizeMsg::End => {
            let mut controller = model.resize.take()?;
            controller.end();
            Some(Cmd::RedrawAreas(vec![DamageArea::Handle]))
        }

        ResizeMsg::Hover(target) => {
            if model.ui.hovered_handle == target {
                return None;
            }
            model.ui.hovered_handle = target;
            Some(Cmd::RedrawAreas(vec![DamageArea::Handle]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HandleAffordance;

    fn begin(model: &mut GridModel, col: usize) {
        update_resize(
            model,
            ResizeMsg::Begin {
                target: ResizeTarget::Column(col),
                pointer: 0.0,
                extent: model.geometry.column_width(col).unwrap(),
                header: true,
            },
        );
    }

    #[test]
    fn test_drag_applies_deltas_to_geometry() {
        let mut model = GridModel::default();
        begin(&mut model, 1);
        update_resize(&mut model, ResizeMsg::Move { pointer: 30.0 });
        update_resize(&mut model, ResizeMsg::Move { pointer: 50.0 });
        assert_eq!(model.geometry.column_width(1), Some(200.0));
    }

    #[test]
    fn test_move_without_drag_is_ignored() {
        let mut model = GridModel::default();
        assert_eq!(
            update_resize(&mut model, ResizeMsg::Move { pointer: 30.0 }),
            None
        );
        assert_eq!(model.geometry.column_width(0), Some(150.0));
    }

    #[test]
    fn test_end_releases_drag() {
        let mut model = GridModel::default();
        begin(&mut model, 0);
        assert_eq!(
            model.handle_affordance(ResizeTarget::Column(0)),
            HandleAffordance::Active
        );
        update_resize(&mut model, ResizeMsg::End);
        assert!(model.resize.is_none());
        update_resize(&mut model, ResizeMsg::Move { pointer: 80.0 });
        assert_eq!(model.geometry.column_width(0), Some(150.0));
    }

    #[test]
    fn test_hover_sets_affordance() {
        let mut model = GridModel::default();
        let target = ResizeTarget::Column(3);
        update_resize(&mut model, ResizeMsg::Hover(Some(target)));
        assert_eq!(model.handle_affordance(target), HandleAffordance::Hover);
        assert_eq!(update_resize(&mut model, ResizeMsg::Hover(Some(target))), None);
        update_resize(&mut model, ResizeMsg::Hover(None));
        assert_eq!(model.handle_affordance(target), HandleAffordance::Idle);
    }
}
