//! In-process lead store
//!
//! Backs the headless binary and the tests. Failures and latency can be
//! injected to exercise the optimistic paths.

use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::Utc;

use super::{InsertCallback, LeadStore, StoreError, Subscription};
use crate::model::{Lead, LeadField, LeadId};

#[derive(Default)]
struct Inner {
    leads: Vec<Lead>,
    subscribers: BTreeMap<u64, Arc<dyn Fn(Lead) + Send + Sync>>,
    next_subscriber: u64,
    fail_fetch: bool,
    fail_updates: bool,
    fail_deletes: bool,
    latency: Option<Duration>,
    delete_batches: Vec<Vec<LeadId>>,
    update_calls: usize,
}

/// Shared in-memory store; clones are handles to the same data
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `leads` (kept in the given order)
    pub fn with_leads(leads: Vec<Lead>) -> Self {
        let store = Self::new();
        store.lock().leads = leads;
        store
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn simulate_latency(&self) {
        let latency = self.lock().latency;
        if let Some(latency) = latency {
            std::thread::sleep(latency);
        }
    }

    /// Insert a lead as another client would, notifying subscribers
    pub fn insert(&self, lead: Lead) {
        let subscribers: Vec<_> = {
            let mut inner = self.lock();
            inner.leads.push(lead.clone());
            inner.subscribers.values().cloned().collect()
        };
        tracing::debug!(
            "Store insert {} ({} subscribers)",
            lead.id,
            subscribers.len()
        );
        for callback in subscribers {
            callback(lead.clone());
        }
    }

    pub fn leads(&self) -> Vec<Lead> {
        self.lock().leads.clone()
    }

    pub fn get(&self, id: &LeadId) -> Option<Lead> {
        self.lock().leads.iter().find(|l| &l.id == id).cloned()
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock().subscribers.len()
    }

    /// Every batch passed to `delete_by_ids`, successful or not
    pub fn delete_batches(&self) -> Vec<Vec<LeadId>> {
        self.lock().delete_batches.clone()
    }

    pub fn update_calls(&self) -> usize {
        self.lock().update_calls
    }

    pub fn set_fail_fetch(&self, fail: bool) {
        self.lock().fail_fetch = fail;
    }

    pub fn set_fail_updates(&self, fail: bool) {
        self.lock().fail_updates = fail;
    }

    pub fn set_fail_deletes(&self, fail: bool) {
        self.lock().fail_deletes = fail;
    }

    /// Delay every remote call by `latency`
    pub fn set_latency(&self, latency: Option<Duration>) {
        self.lock().latency = latency;
    }
}

impl LeadStore for MemoryStore {
    fn fetch_all(&self) -> Result<Vec<Lead>, StoreError> {
        self.simulate_latency();
        let inner = self.lock();
        if inner.fail_fetch {
            return Err(StoreError::Unavailable("fetch failed".into()));
        }
        Ok(inner.leads.clone())
    }

    fn update_field(&self, id: &LeadId, field: LeadField, value: &str) -> Result<(), StoreError> {
        self.simulate_latency();
        let mut inner = self.lock();
        inner.update_calls += 1;
        if inner.fail_updates {
            return Err(StoreError::Rejected(format!("update of {} refused", field.key())));
        }
        let lead = inner
            .leads
            .iter_mut()
            .find(|l| &l.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        lead.set(field, value);
        lead.last_updated = Utc::now();
        Ok(())
    }

    fn delete_by_ids(&self, ids: &[LeadId]) -> Result<(), StoreError> {
        self.simulate_latency();
        let mut inner = self.lock();
        inner.delete_batches.push(ids.to_vec());
        if inner.fail_deletes {
            return Err(StoreError::Rejected("delete refused".into()));
        }
        let ids: HashSet<&LeadId> = ids.iter().collect();
        inner.leads.retain(|l| !ids.contains(&l.id));
        Ok(())
    }

    fn subscribe_inserts(&self, callback: InsertCallback) -> Subscription {
        let id = {
            let mut inner = self.lock();
            let id = inner.next_subscriber;
            inner.next_subscriber += 1;
            inner.subscribers.insert(id, Arc::from(callback));
            id
        };
        let weak = Arc::downgrade(&self.inner);
        Subscription::new(id, move || {
            if let Some(inner) = weak.upgrade() {
                inner
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .subscribers
                    .remove(&id);
            }
        })
    }
}
