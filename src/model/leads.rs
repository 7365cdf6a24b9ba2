//! The local copy of the lead collection
//!
//! Rows are only mutated through the sync handlers in `update::sync`;
//! everything else gets read access.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::lead::{Lead, LeadField, LeadId};

/// Where a realtime insert lands in the row list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertPlacement {
    /// Append at the end, leaving existing indices untouched
    #[default]
    Append,
    /// Insert by creation time, newest first, matching the load order
    ByCreatedAt,
}

/// Ordered lead rows as displayed
#[derive(Debug, Clone, Default)]
pub struct LeadTable {
    rows: Vec<Lead>,
}

impl LeadTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<&Lead> {
        self.rows.get(row)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Lead> {
        self.rows.iter()
    }

    pub fn id_at(&self, row: usize) -> Option<&LeadId> {
        self.rows.get(row).map(|l| &l.id)
    }

    pub fn index_of(&self, id: &LeadId) -> Option<usize> {
        self.rows.iter().position(|l| &l.id == id)
    }

    pub fn find(&self, id: &LeadId) -> Option<&Lead> {
        self.rows.iter().find(|l| &l.id == id)
    }

    /// Snapshot of row identities in display order
    pub fn ids(&self) -> Vec<LeadId> {
        self.rows.iter().map(|l| l.id.clone()).collect()
    }

    /// Current index of every lead, for re-resolving coordinates
    pub fn index_map(&self) -> HashMap<LeadId, usize> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, l)| (l.id.clone(), i))
            .collect()
    }

    /// Replace all rows, enforcing newest-first order
    pub(crate) fn replace_all(&mut self, mut rows: Vec<Lead>) {
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        self.rows = rows;
    }

    /// Set one field of one lead, returning the previous value
    pub(crate) fn set_field(&mut self, id: &LeadId, field: LeadField, value: &str) -> Option<String> {
        let lead = self.rows.iter_mut().find(|l| &l.id == id)?;
        let old = lead.get(field).to_string();
        lead.set(field, value);
        Some(old)
    }

    /// Remove every lead whose id is in `ids`, returning how many were removed
    pub(crate) fn remove_ids(&mut self, ids: &HashSet<LeadId>) -> usize {
        let before = self.rows.len();
        self.rows.retain(|l| !ids.contains(&l.id));
        before - self.rows.len()
    }

    /// Add a lead pushed by the store
    ///
    /// Returns the index it landed at, or `None` if a lead with the same id is
    /// already present.
    pub(crate) fn merge_insert(&mut self, lead: Lead, placement: InsertPlacement) -> Option<usize> {
        if self.index_of(&lead.id).is_some() {
            return None;
        }
        let index = match placement {
            InsertPlacement::Append => self.rows.len(),
            InsertPlacement::ByCreatedAt => self
                .rows
                .partition_point(|r| r.created_at >= lead.created_at),
        };
        self.rows.insert(index, lead);
        Some(index)
    }
}
