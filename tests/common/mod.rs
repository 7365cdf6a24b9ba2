//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use lead_grid::config::GridConfig;
use lead_grid::messages::{Msg, SyncMsg};
use lead_grid::model::{GridModel, Lead, LeadField, LeadId};
use lead_grid::runtime::GridRuntime;
use lead_grid::store::MemoryStore;
use lead_grid::update::update;

/// Upper bound for waiting on worker threads in tests
pub const SETTLE: Duration = Duration::from_secs(5);

pub fn ts(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

pub fn lead(id: &str, secs: i64) -> Lead {
    Lead::new(LeadId::new(id), ts(secs)).with(LeadField::CompanyName, format!("Company {}", id))
}

/// `n` leads named `lead-0..n`, created so that `lead-0` is newest
pub fn test_leads(n: usize) -> Vec<Lead> {
    (0..n)
        .map(|i| lead(&format!("lead-{}", i), 10_000 - i as i64))
        .collect()
}

pub fn id(i: usize) -> LeadId {
    LeadId::new(format!("lead-{}", i))
}

/// A model with `n` loaded rows, `lead-i` at row `i`
pub fn test_model(n: usize) -> GridModel {
    test_model_with_config(n, GridConfig::default())
}

pub fn test_model_with_config(n: usize, config: GridConfig) -> GridModel {
    let mut model = GridModel::new(config);
    update(&mut model, Msg::Sync(SyncMsg::Loaded(Ok(test_leads(n)))));
    model
}

/// A mounted runtime over a store seeded with `n` rows, initial load done
pub fn mounted_runtime(n: usize) -> (Arc<MemoryStore>, GridRuntime<MemoryStore>) {
    mounted_runtime_with_config(n, GridConfig::default())
}

pub fn mounted_runtime_with_config(
    n: usize,
    config: GridConfig,
) -> (Arc<MemoryStore>, GridRuntime<MemoryStore>) {
    let store = Arc::new(MemoryStore::with_leads(test_leads(n)));
    let mut runtime = GridRuntime::new(Arc::clone(&store), config);
    runtime.mount();
    assert!(runtime.settle(SETTLE), "initial load did not settle");
    (store, runtime)
}

/// Row ids in display order
pub fn row_ids(model: &GridModel) -> Vec<String> {
    model.leads.iter().map(|l| l.id.to_string()).collect()
}
