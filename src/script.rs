//! Scripted grid actions for the headless driver
//!
//! A script is a YAML list replayed against a mounted runtime:
//!
//! ```yaml
//! - select: { row: 1, col: 1 }
//! - extend: { row: 3, col: 3 }
//! - edit: { row: 0, col: 0, value: "Acme" }
//! - delete_selected
//! - drag_column: { index: 0, moves: [20, 40] }
//! - insert: { company_name: "Globex" }
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::messages::{GeometryMsg, Msg, ResizeMsg, SelectionMsg};
use crate::model::{Lead, LeadField, LeadId, ResizeTarget};
use crate::runtime::GridRuntime;
use crate::store::MemoryStore;

/// How long one action may wait for its remote calls
const SETTLE_TIMEOUT: Duration = Duration::from_secs(5);

/// A lead inserted by another client
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NewLead {
    pub id: Option<LeadId>,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub fields: HashMap<LeadField, String>,
}

impl NewLead {
    pub fn into_lead(self) -> Lead {
        let id = self.id.unwrap_or_else(LeadId::generate);
        let mut lead = Lead::new(id, self.created_at.unwrap_or_else(Utc::now));
        for (field, value) in self.fields {
            lead.set(field, value);
        }
        lead
    }
}

/// One step of a script
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptAction {
    Select { row: usize, col: usize },
    Extend { row: usize, col: usize },
    SelectRow(usize),
    SelectAll,
    ClearSelection,
    Edit { row: usize, col: usize, value: String },
    DeleteSelected,
    ResizeColumn { index: usize, delta: f64 },
    ResizeRow { index: usize, delta: f64 },
    /// Drag a header column handle through pointer offsets from its start
    DragColumn { index: usize, moves: Vec<f64> },
    Insert(NewLead),
    Reload,
}

/// Read a script file
pub fn load_script(path: &Path) -> Result<Vec<ScriptAction>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script at {}", path.display()))?;
    parse_script(&content).with_context(|| format!("Failed to parse script at {}", path.display()))
}

pub fn parse_script(content: &str) -> Result<Vec<ScriptAction>> {
    Ok(serde_yaml::from_str(content)?)
}

/// Read a JSON array of leads
pub fn load_seed(path: &Path) -> Result<Vec<Lead>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed at {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse seed at {}", path.display()))
}

impl ScriptAction {
    /// Messages this action feeds to the grid, in order
    pub fn messages(&self, runtime: &GridRuntime<MemoryStore>) -> Vec<Msg> {
        match self {
            ScriptAction::Select { row, col } => vec![Msg::select_cell(*row, *col, false)],
            ScriptAction::Extend { row, col } => vec![Msg::select_cell(*row, *col, true)],
            ScriptAction::SelectRow(row) => vec![Msg::select_row(*row)],
            ScriptAction::SelectAll => vec![Msg::select_all()],
            ScriptAction::ClearSelection => vec![Msg::Selection(SelectionMsg::Clear)],
            ScriptAction::Edit { row, col, value } => {
                vec![Msg::start_edit(*row, *col), Msg::commit_edit(value.clone())]
            }
            ScriptAction::DeleteSelected => vec![Msg::delete_selected()],
            ScriptAction::ResizeColumn { index, delta } => {
                vec![Msg::Geometry(GeometryMsg::ResizeColumn {
                    index: *index,
                    delta: *delta,
                })]
            }
            ScriptAction::ResizeRow { index, delta } => {
                vec![Msg::Geometry(GeometryMsg::ResizeRow {
                    index: *index,
                    delta: *delta,
                })]
            }
            ScriptAction::DragColumn { index, moves } => {
                let Some(extent) = runtime.model().geometry.column_width(*index) else {
                    return Vec::new();
                };
                let mut msgs = vec![Msg::Resize(ResizeMsg::Begin {
                    target: ResizeTarget::Column(*index),
                    pointer: 0.0,
                    extent,
                    header: true,
                })];
                msgs.extend(
                    moves
                        .iter()
                        .map(|&pointer| Msg::Resize(ResizeMsg::Move { pointer })),
                );
                msgs.push(Msg::Resize(ResizeMsg::End));
                msgs
            }
            ScriptAction::Insert(_) => Vec::new(),
            ScriptAction::Reload => vec![Msg::load()],
        }
    }

    /// Run this action and wait for the remote calls it started
    pub fn apply(self, runtime: &mut GridRuntime<MemoryStore>) -> bool {
        tracing::debug!("Script action {:?}", self);
        for msg in self.messages(runtime) {
            runtime.dispatch(msg);
        }
        if let ScriptAction::Insert(new_lead) = self {
            let store = runtime.store().clone();
            store.insert(new_lead.into_lead());
        }
        runtime.settle(SETTLE_TIMEOUT)
    }
}
