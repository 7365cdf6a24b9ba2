//! Inline cell edit session
//!
//! At most one cell is in edit mode. Opening another cell discards the
//! current edit without committing it.

use super::lead::{LeadField, LeadId};
use super::selection::CellPosition;

/// The cell currently being edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellEditState {
    /// Display position when the edit started (remapped if rows move)
    pub position: CellPosition,
    /// Row identity resolved when the edit started
    pub lead_id: LeadId,
    pub field: LeadField,
    /// Value before editing
    pub original: String,
}

/// A committed edit that still has to reach the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellEdit {
    pub lead_id: LeadId,
    pub field: LeadField,
    pub old_value: String,
    pub new_value: String,
}

/// Edit-mode state machine: idle or editing exactly one cell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSession {
    editing: Option<CellEditState>,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn current(&self) -> Option<&CellEditState> {
        self.editing.as_ref()
    }

    pub fn is_editing_cell(&self, row: usize, col: usize) -> bool {
        self.editing
            .as_ref()
            .is_some_and(|e| e.position == CellPosition::new(row, col))
    }

    /// Enter edit mode, returning the edit that was discarded if any
    pub fn start(&mut self, state: CellEditState) -> Option<CellEditState> {
        let previous = self.editing.replace(state);
        if let Some(prev) = &previous {
            tracing::debug!(
                "Discarding uncommitted edit at ({}, {})",
                prev.position.row,
                prev.position.col
            );
        }
        previous
    }

    /// Leave edit mode with `new_value`
    ///
    /// Returns the edit to send to the store, or `None` when idle or when the
    /// value did not change.
    pub fn commit(&mut self, new_value: String) -> Option<CellEdit> {
        let state = self.editing.take()?;
        if state.original == new_value {
            return None;
        }
        Some(CellEdit {
            lead_id: state.lead_id,
            field: state.field,
            old_value: state.original,
            new_value,
        })
    }

    /// Leave edit mode without saving
    pub fn cancel(&mut self) -> Option<CellEditState> {
        self.editing.take()
    }

    /// Follow the edited row after the row list changed
    ///
    /// `resolve` maps a lead id to its current row index. The edit is
    /// cancelled if its row is gone.
    pub fn remap(&mut self, resolve: impl Fn(&LeadId) -> Option<usize>) {
        let Some(state) = self.editing.as_mut() else {
            return;
        };
        match resolve(&state.lead_id) {
            Some(row) => state.position.row = row,
            None => {
                tracing::debug!("Edited lead {} disappeared, cancelling edit", state.lead_id);
                self.editing = None;
            }
        }
    }
}
