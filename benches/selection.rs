//! Benchmarks for selection and row re-resolution
//!
//! Run with: cargo bench selection

use chrono::{TimeZone, Utc};
use lead_grid::messages::{Msg, SyncMsg};
use lead_grid::model::{GridModel, Lead, LeadId};
use lead_grid::update::update;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn loaded_model(rows: usize) -> GridModel {
    let leads = (0..rows)
        .map(|i| {
            Lead::new(
                LeadId::new(format!("lead-{}", i)),
                Utc.timestamp_opt(1_000_000 - i as i64, 0).unwrap(),
            )
        })
        .collect();
    let mut model = GridModel::default();
    update(&mut model, Msg::Sync(SyncMsg::Loaded(Ok(leads))));
    model
}

// ============================================================================
// Selection
// ============================================================================

#[divan::bench(args = [100, 1_000, 10_000])]
fn select_all(bencher: divan::Bencher, rows: usize) {
    let model = loaded_model(rows);
    bencher
        .with_inputs(|| model.clone())
        .bench_local_values(|mut model| {
            update(&mut model, Msg::select_all());
            model
        });
}

#[divan::bench(args = [100, 1_000])]
fn extend_range(bencher: divan::Bencher, rows: usize) {
    let mut model = loaded_model(rows);
    update(&mut model, Msg::select_cell(0, 0, false));
    bencher.bench_local(|| {
        update(&mut model, Msg::select_cell(rows - 1, 5, true));
    });
}

// ============================================================================
// Row re-resolution
// ============================================================================

#[divan::bench(args = [100, 1_000, 10_000])]
fn insert_with_full_selection(bencher: divan::Bencher, rows: usize) {
    let mut model = loaded_model(rows);
    update(&mut model, Msg::select_all());
    let mut next = 0usize;
    bencher.bench_local(|| {
        next += 1;
        let lead = Lead::new(
            LeadId::new(format!("new-{}", next)),
            Utc.timestamp_opt(2_000_000, 0).unwrap(),
        );
        update(&mut model, Msg::Sync(SyncMsg::Inserted(lead)));
    });
}
