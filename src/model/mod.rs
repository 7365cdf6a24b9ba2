//! Grid model - the complete state of one mounted grid
//!
//! Follows the Elm Architecture: the model is plain owned data, changed only
//! by `update` in response to messages.

pub mod edit;
pub mod geometry;
pub mod lead;
pub mod leads;
pub mod resize;
pub mod selection;
pub mod ui;

pub use edit::{CellEdit, CellEditState, EditSession};
pub use geometry::GridGeometry;
pub use lead::{column_at, column_count, ColumnDef, ColumnIcon, FieldType, Lead, LeadField, LeadId, COLUMNS};
pub use leads::{InsertPlacement, LeadTable};
pub use resize::{HandleAffordance, ResizeAxis, ResizeBounds, ResizeController, ResizeTarget};
pub use selection::{CellPosition, GridBounds, SelectionKind, SelectionModel};
pub use ui::{LoadState, TransientMessage, UiState};

use crate::config::GridConfig;

/// The complete grid state
#[derive(Debug, Clone)]
pub struct GridModel {
    /// Local copy of the remote rows
    pub leads: LeadTable,
    pub geometry: GridGeometry,
    pub selection: SelectionModel,
    pub edit: EditSession,
    /// The one resize gesture this grid may have in flight
    pub resize: Option<ResizeController>,
    pub ui: UiState,
    pub config: GridConfig,
}

impl GridModel {
    pub fn new(config: GridConfig) -> Self {
        Self {
            leads: LeadTable::new(),
            geometry: GridGeometry::new(column_count(), &config),
            selection: SelectionModel::new(),
            edit: EditSession::new(),
            resize: None,
            ui: UiState::new(),
            config,
        }
    }

    pub fn bounds(&self) -> GridBounds {
        GridBounds::new(self.leads.len(), column_count())
    }

    /// The delete action is offered only while something is selected
    pub fn can_delete(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Lead ids behind the current selection, each once, in display order
    pub fn selected_lead_ids(&self) -> Vec<LeadId> {
        self.selection
            .selected_rows()
            .into_iter()
            .filter_map(|row| self.leads.id_at(row).cloned())
            .collect()
    }

    /// Bounds a new gesture on `target` gets
    ///
    /// Column handles in the header use the narrower header range.
    pub fn resize_bounds_for(&self, target: ResizeTarget, header: bool) -> ResizeBounds {
        match target {
            ResizeTarget::Column(_) if header => self.config.header_resize.bounds(),
            ResizeTarget::Column(_) => self.config.column_handle_resize.bounds(),
            ResizeTarget::Row(_) => self.config.row_handle_bounds(),
        }
    }

    /// Highlight state of the handle attached to `target`
    pub fn handle_affordance(&self, target: ResizeTarget) -> HandleAffordance {
        let hovered = self.ui.hovered_handle == Some(target);
        match &self.resize {
            Some(controller) if controller.target() == target => controller.affordance(hovered),
            _ if hovered => HandleAffordance::Hover,
            _ => HandleAffordance::Idle,
        }
    }

    /// Drop any in-flight resize gesture
    ///
    /// Called when the grid is unmounted so a drag that never saw a release
    /// does not outlive it.
    pub fn release_pointer(&mut self) {
        if let Some(mut controller) = self.resize.take() {
            if controller.is_dragging() {
                tracing::debug!(
                    "Releasing dangling resize drag on {:?}",
                    controller.target()
                );
            }
            controller.end();
        }
        self.ui.hovered_handle = None;
    }

    /// Re-derive selection and edit coordinates after the row list changed
    ///
    /// `previous` is the row identity order before the change. Coordinates are
    /// resolved through the lead id, never trusted by index.
    pub(crate) fn reresolve_rows(&mut self, previous: &[LeadId]) {
        let current = self.leads.index_map();
        self.selection.remap_rows(|old_row| {
            previous
                .get(old_row)
                .and_then(|id| current.get(id).copied())
        });
        self.edit.remap(|id| current.get(id).copied());
        self.geometry.ensure_rows(self.leads.len());
    }
}

impl Default for GridModel {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}
