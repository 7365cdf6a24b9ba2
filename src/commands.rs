//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::model::{LeadField, LeadId};

/// A region of the grid that needs repainting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageArea {
    /// Header and cells of one column
    Column(usize),
    /// Row header and cells of one row
    Row(usize),
    /// Cell highlight state (selection, edit cursor)
    Cells,
    /// Error banner and load indicator
    Banner,
    /// Resize handle highlight
    Handle,
}

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Repaint everything
    Redraw,
    /// Repaint specific areas
    RedrawAreas(Vec<DamageArea>),
    /// Fetch all leads, newest first
    FetchLeads,
    /// Push one field change to the store
    UpdateField {
        id: LeadId,
        field: LeadField,
        value: String,
    },
    /// Delete a batch of leads in one request
    DeleteLeads { ids: Vec<LeadId> },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    pub fn redraw_cells() -> Self {
        Cmd::RedrawAreas(vec![DamageArea::Cells])
    }

    pub fn redraw_banner() -> Self {
        Cmd::RedrawAreas(vec![DamageArea::Banner])
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::RedrawAreas(areas) => !areas.is_empty(),
            // Remote calls repaint when their completion arrives
            Cmd::FetchLeads => false,
            Cmd::UpdateField { .. } => false,
            Cmd::DeleteLeads { .. } => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Areas to repaint; `None` means everything
    pub fn damage(&self) -> Option<Vec<DamageArea>> {
        match self {
            Cmd::Redraw => None,
            Cmd::RedrawAreas(areas) => Some(areas.clone()),
            Cmd::Batch(cmds) => {
                let mut all = Vec::new();
                for cmd in cmds {
                    match cmd.damage() {
                        None => return None,
                        Some(areas) => {
                            for area in areas {
                                if !all.contains(&area) {
                                    all.push(area);
                                }
                            }
                        }
                    }
                }
                Some(all)
            }
            _ => Some(Vec::new()),
        }
    }

    /// Flatten batches into the remote calls they contain
    pub fn remote_calls(&self) -> Vec<&Cmd> {
        match self {
            Cmd::FetchLeads | Cmd::UpdateField { .. } | Cmd::DeleteLeads { .. } => vec![self],
            Cmd::Batch(cmds) => cmds.iter().flat_map(|c| c.remote_calls()).collect(),
            _ => Vec::new(),
        }
    }
}
