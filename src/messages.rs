//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::model::{Lead, LeadField, LeadId, ResizeTarget};
use crate::store::StoreError;

/// Direct geometry changes (keyboard shortcuts, programmatic sizing)
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryMsg {
    ResizeColumn { index: usize, delta: f64 },
    ResizeRow { index: usize, delta: f64 },
}

/// Pointer gestures on resize handles
#[derive(Debug, Clone, PartialEq)]
pub enum ResizeMsg {
    /// Pointer pressed on a handle; `extent` is the element's current size.
    /// `header` is set for column handles that live in the column header.
    Begin {
        target: ResizeTarget,
        pointer: f64,
        extent: f64,
        header: bool,
    },
    /// Pointer moved while a drag may be active (x or y, per handle axis)
    Move { pointer: f64 },
    /// Pointer released anywhere
    End,
    /// Pointer entered (`Some`) or left (`None`) a handle
    Hover(Option<ResizeTarget>),
}

/// Cell, row and grid selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionMsg {
    /// Click on a cell; `extend` is true for shift-click
    SelectCell { row: usize, col: usize, extend: bool },
    /// Click on a row header
    SelectRow(usize),
    /// Click on the corner of the column letter row
    SelectAll,
    Clear,
}

/// Inline editing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditMsg {
    Start { row: usize, col: usize },
    Commit(String),
    Cancel,
}

/// Local data mutations and remote completions
#[derive(Debug, Clone)]
pub enum SyncMsg {
    /// Fetch every lead from the store
    Load,
    Loaded(Result<Vec<Lead>, StoreError>),
    /// Optimistically set a field and push it to the store
    ApplyFieldUpdate {
        id: LeadId,
        field: LeadField,
        value: String,
    },
    UpdateCompleted {
        id: LeadId,
        field: LeadField,
        result: Result<(), StoreError>,
    },
    /// Delete every row touched by the selection
    DeleteSelected,
    DeleteRows(Vec<LeadId>),
    DeleteCompleted {
        ids: Vec<LeadId>,
        result: Result<(), StoreError>,
    },
    /// Insert pushed by the store's change stream
    Inserted(Lead),
}

/// Housekeeping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMsg {
    /// Periodic tick, expires the error banner
    Tick,
    DismissError,
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Geometry(GeometryMsg),
    Resize(ResizeMsg),
    Selection(SelectionMsg),
    Edit(EditMsg),
    Sync(SyncMsg),
    Ui(UiMsg),
}

impl Msg {
    pub fn select_cell(row: usize, col: usize, extend: bool) -> Self {
        Msg::Selection(SelectionMsg::SelectCell { row, col, extend })
    }

    pub fn select_row(row: usize) -> Self {
        Msg::Selection(SelectionMsg::SelectRow(row))
    }

    pub fn select_all() -> Self {
        Msg::Selection(SelectionMsg::SelectAll)
    }

    pub fn start_edit(row: usize, col: usize) -> Self {
        Msg::Edit(EditMsg::Start { row, col })
    }

    pub fn commit_edit(value: impl Into<String>) -> Self {
        Msg::Edit(EditMsg::Commit(value.into()))
    }

    pub fn load() -> Self {
        Msg::Sync(SyncMsg::Load)
    }

    pub fn delete_selected() -> Self {
        Msg::Sync(SyncMsg::DeleteSelected)
    }
}
