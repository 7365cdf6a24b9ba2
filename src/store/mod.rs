//! Remote lead store contract
//!
//! The grid treats persistence as an opaque service: fetch, field update,
//! batched delete, and a stream of insert notifications. Calls block; the
//! runtime runs them off the update loop.

mod memory;

pub use memory::MemoryStore;

use std::fmt;

use crate::model::{Lead, LeadField, LeadId};

/// Error reported by a store call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store refused the request
    Rejected(String),
    /// A referenced lead does not exist remotely
    NotFound(LeadId),
    /// The store could not be reached
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Rejected(reason) => write!(f, "request rejected: {}", reason),
            StoreError::NotFound(id) => write!(f, "lead {} not found", id),
            StoreError::Unavailable(reason) => write!(f, "store unavailable: {}", reason),
        }
    }
}

impl std::error::Error for StoreError {}

/// Callback invoked for every lead inserted remotely
pub type InsertCallback = Box<dyn Fn(Lead) + Send + Sync>;

/// Handle to an insert subscription
///
/// Dropping the handle unsubscribes. `unsubscribe` does the same explicitly.
pub struct Subscription {
    id: u64,
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn new(id: u64, release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            id,
            release: Some(Box::new(release)),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(release) = self.release.take() {
            tracing::debug!("Releasing insert subscription {}", self.id);
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// The remote persistence service behind the grid
pub trait LeadStore: Send + Sync + 'static {
    /// Every lead, newest first (callers re-sort anyway)
    fn fetch_all(&self) -> Result<Vec<Lead>, StoreError>;

    fn update_field(&self, id: &LeadId, field: LeadField, value: &str) -> Result<(), StoreError>;

    /// Delete all `ids` in a single request
    fn delete_by_ids(&self, ids: &[LeadId]) -> Result<(), StoreError>;

    /// Register for insert notifications until the handle is released
    fn subscribe_inserts(&self, callback: InsertCallback) -> Subscription;
}
