//! Data sync handlers - the only writers of the lead rows
//!
//! Mutations are applied locally first where the contract allows it, then
//! pushed to the store as commands. Completions come back as messages and are
//! resolved by lead id, never by row index.

use std::collections::HashSet;

use crate::commands::{Cmd, DamageArea};
use crate::messages::SyncMsg;
use crate::model::{GridModel, LeadField, LeadId, LoadState};

/// Banner text for a rejected field update
pub const UPDATE_FAILED: &str = "Failed to update lead";
/// Banner text for a rejected delete
pub const DELETE_FAILED: &str = "Failed to delete leads";

pub fn update_sync(model: &mut GridModel, msg: SyncMsg) -> Option<Cmd> {
    match msg {
        SyncMsg::Load => {
            model.ui.load_state = LoadState::Loading;
            Some(Cmd::batch(vec![Cmd::redraw_banner(), Cmd::FetchLeads]))
        }

        SyncMsg::Loaded(Ok(rows)) => {
            tracing::info!(target: "sync", "Loaded {} leads", rows.len());
            let previous = model.leads.ids();
            model.leads.replace_all(rows);
            model.reresolve_rows(&previous);
            model.ui.load_state = LoadState::Ready;
            Some(Cmd::Redraw)
        }

        SyncMsg::Loaded(Err(e)) => {
            tracing::error!(target: "sync", "Failed to load leads: {}", e);
            model.ui.load_state = LoadState::Failed(e.to_string());
            Some(Cmd::redraw_banner())
        }

        SyncMsg::ApplyFieldUpdate { id, field, value } => {
            Some(apply_field_update(model, id, field, value))
        }

        SyncMsg::UpdateCompleted { id, field, result } => match result {
            Ok(()) => {
                tracing::debug!(target: "sync", "Saved {} of lead {}", field.key(), id);
                None
            }
            Err(e) => {
                // The optimistic value stays in place
                tracing::warn!(target: "sync", "Update of {} on lead {} failed: {}", field.key(), id, e);
                model.ui.show_error(UPDATE_FAILED, model.config.error_display());
                Some(Cmd::redraw_banner())
            }
        },

        SyncMsg::DeleteSelected => {
            let ids = model.selected_lead_ids();
            if ids.is_empty() {
                tracing::debug!(target: "sync", "Delete requested with nothing selected");
                return None;
            }
            delete_rows(ids)
        }

        SyncMsg::DeleteRows(ids) => delete_rows(ids),

        SyncMsg::DeleteCompleted { ids, result } => match result {
            Ok(()) => {
                remove_deleted(model, ids);
                Some(Cmd::Redraw)
            }
            Err(e) => {
                tracing::warn!(target: "sync", "Delete of {} leads failed: {}", ids.len(), e);
                model.ui.show_error(DELETE_FAILED, model.config.error_display());
                Some(Cmd::redraw_banner())
            }
        },

        SyncMsg::Inserted(lead) => {
            let id = lead.id.clone();
            let previous = model.leads.ids();
            match model.leads.merge_insert(lead, model.config.insert_placement) {
                Some(index) => {
                    tracing::debug!(target: "sync", "Merged insert {} at row {}", id, index);
                    model.reresolve_rows(&previous);
                    Some(Cmd::Redraw)
                }
                None => {
                    tracing::debug!(target: "sync", "Ignoring duplicate insert {}", id);
                    None
                }
            }
        }
    }
}

/// Set a field locally and schedule the remote update
///
/// The new value is visible before the store answers.
pub(crate) fn apply_field_update(
    model: &mut GridModel,
    id: LeadId,
    field: LeadField,
    value: String,
) -> Cmd {
    if model.leads.set_field(&id, field, &value).is_none() {
        tracing::debug!(target: "sync", "Lead {} is not loaded, skipping update", id);
        return Cmd::None;
    }
    let damage = match model.leads.index_of(&id) {
        Some(row) => Cmd::RedrawAreas(vec![DamageArea::Row(row)]),
        None => Cmd::None,
    };
    Cmd::batch(vec![damage, Cmd::UpdateField { id, field, value }])
}

/// Batch ids into one delete request, collapsing duplicates
fn delete_rows(ids: Vec<LeadId>) -> Option<Cmd> {
    let mut seen = HashSet::new();
    let ids: Vec<LeadId> = ids.into_iter().filter(|id| seen.insert(id.clone())).collect();
    if ids.is_empty() {
        return None;
    }
    tracing::debug!(target: "sync", "Requesting delete of {} leads", ids.len());
    Some(Cmd::DeleteLeads { ids })
}

/// Drop deleted rows after the store confirmed the delete
fn remove_deleted(model: &mut GridModel, ids: Vec<LeadId>) {
    let deleted: HashSet<LeadId> = ids.into_iter().collect();

    let touches_selection = model
        .selection
        .selected_rows()
        .into_iter()
        .filter_map(|row| model.leads.id_at(row))
        .any(|id| deleted.contains(id));
    if touches_selection {
        model.selection.clear();
    }

    let previous = model.leads.ids();
    let removed = model.leads.remove_ids(&deleted);
    model.reresolve_rows(&previous);
    tracing::info!(target: "sync", "Deleted {} leads", removed);
}
