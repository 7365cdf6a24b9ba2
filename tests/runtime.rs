//! Mounted grid tests: worker threads, completions and subscription lifetime

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{id, lead, mounted_runtime, mounted_runtime_with_config, row_ids, SETTLE};
use lead_grid::config::GridConfig;
use lead_grid::messages::{Msg, SyncMsg};
use lead_grid::model::{InsertPlacement, LeadField, LoadState};
use lead_grid::runtime::GridRuntime;
use lead_grid::store::MemoryStore;
use lead_grid::update::{DELETE_FAILED, UPDATE_FAILED};

#[test]
fn test_mount_loads_and_subscribes() {
    let (store, runtime) = mounted_runtime(4);
    assert!(runtime.is_mounted());
    assert_eq!(store.subscriber_count(), 1);
    assert_eq!(runtime.model().leads.len(), 4);
    assert_eq!(runtime.model().ui.load_state, LoadState::Ready);
    assert_eq!(runtime.in_flight(), 0);
}

#[test]
fn test_mount_twice_keeps_one_subscription() {
    let (store, mut runtime) = mounted_runtime(1);
    runtime.mount();
    assert_eq!(store.subscriber_count(), 1);
}

#[test]
fn test_unmount_releases_subscription() {
    let (store, mut runtime) = mounted_runtime(2);
    runtime.unmount();
    assert!(!runtime.is_mounted());
    assert_eq!(store.subscriber_count(), 0);

    store.insert(lead("late", 1));
    runtime.pump();
    assert_eq!(runtime.model().leads.len(), 2);
}

#[test]
fn test_unmount_discards_queued_inserts() {
    let (store, mut runtime) = mounted_runtime(2);
    store.insert(lead("queued", 1));
    runtime.unmount();
    runtime.pump();
    assert_eq!(runtime.model().leads.len(), 2);
    assert!(!runtime.model().leads.iter().any(|l| l.id.as_str() == "queued"));
}

#[test]
fn test_unmount_keeps_queued_completions() {
    let (store, mut runtime) = mounted_runtime(2);
    store.set_latency(Some(Duration::from_millis(20)));
    runtime.dispatch(Msg::start_edit(0, 0));
    runtime.dispatch(Msg::commit_edit("Renamed"));
    assert_eq!(runtime.in_flight(), 1);

    runtime.unmount();
    assert!(runtime.settle(SETTLE));
    assert_eq!(runtime.in_flight(), 0);
}

#[test]
fn test_drop_releases_subscription() {
    let (store, runtime) = mounted_runtime(1);
    drop(runtime);
    assert_eq!(store.subscriber_count(), 0);
}

#[test]
fn test_failed_initial_load_is_reported() {
    let store = Arc::new(MemoryStore::with_leads(common::test_leads(2)));
    store.set_fail_fetch(true);
    let mut runtime = GridRuntime::new(Arc::clone(&store), GridConfig::default());
    runtime.mount();
    assert!(runtime.settle(SETTLE));

    assert!(runtime.model().leads.is_empty());
    assert!(runtime.model().ui.load_state.error().is_some());
}

#[test]
fn test_edit_reaches_store() {
    let (store, mut runtime) = mounted_runtime(3);
    runtime.dispatch(Msg::start_edit(2, 0));
    runtime.dispatch(Msg::commit_edit("Initech"));

    // Visible immediately, before the worker answers
    assert_eq!(runtime.model().leads.get(2).unwrap().company_name, "Initech");

    assert!(runtime.settle(SETTLE));
    assert_eq!(store.get(&id(2)).unwrap().company_name, "Initech");
    assert!(runtime.model().ui.error_banner.is_none());
}

#[test]
fn test_rejected_update_shows_banner_and_keeps_value() {
    let (store, mut runtime) = mounted_runtime(1);
    store.set_fail_updates(true);
    runtime.dispatch(Msg::start_edit(0, 4));
    runtime.dispatch(Msg::commit_edit("x@y.z"));
    assert!(runtime.settle(SETTLE));

    assert_eq!(runtime.model().leads.get(0).unwrap().company_email, "x@y.z");
    assert_eq!(store.get(&id(0)).unwrap().company_email, "");
    assert_eq!(runtime.model().ui.banner_text(), Some(UPDATE_FAILED));
}

#[test]
fn test_concurrent_mutations_all_complete() {
    let (store, mut runtime) = mounted_runtime(3);
    store.set_latency(Some(Duration::from_millis(20)));
    for (row, value) in ["a", "b", "c"].iter().enumerate() {
        runtime.dispatch(Msg::Sync(SyncMsg::ApplyFieldUpdate {
            id: id(row),
            field: LeadField::Description,
            value: value.to_string(),
        }));
    }
    assert_eq!(runtime.in_flight(), 3);
    assert!(runtime.settle(SETTLE));
    assert_eq!(store.update_calls(), 3);
    assert_eq!(store.get(&id(1)).unwrap().description, "b");
}

#[test]
fn test_delete_selected_is_one_batched_request() {
    let (store, mut runtime) = mounted_runtime(6);
    runtime.dispatch(Msg::select_cell(1, 0, false));
    runtime.dispatch(Msg::select_cell(4, 3, true));
    runtime.dispatch(Msg::delete_selected());
    assert!(runtime.settle(SETTLE));

    assert_eq!(store.delete_batches(), vec![vec![id(1), id(2), id(3), id(4)]]);
    assert_eq!(row_ids(runtime.model()), vec!["lead-0", "lead-5"]);
    assert!(runtime.model().selection.is_empty());
    assert_eq!(store.leads().len(), 2);
}

#[test]
fn test_rejected_delete_leaves_grid_untouched() {
    let (store, mut runtime) = mounted_runtime(6);
    store.set_fail_deletes(true);
    runtime.dispatch(Msg::select_row(5));
    runtime.dispatch(Msg::delete_selected());
    assert!(runtime.settle(SETTLE));

    assert_eq!(runtime.model().leads.len(), 6);
    assert!(runtime.model().selection.row_has_selection(5));
    assert_eq!(runtime.model().ui.banner_text(), Some(DELETE_FAILED));
}

#[test]
fn test_remote_insert_is_merged() {
    let (store, mut runtime) = mounted_runtime(2);
    store.insert(lead("remote", 1));
    assert!(runtime.pump());
    assert_eq!(row_ids(runtime.model()), vec!["lead-0", "lead-1", "remote"]);
}

#[test]
fn test_remote_insert_sorted_placement() {
    let config = GridConfig {
        insert_placement: InsertPlacement::ByCreatedAt,
        ..GridConfig::default()
    };
    let (store, mut runtime) = mounted_runtime_with_config(2, config);
    runtime.dispatch(Msg::select_row(1));
    store.insert(lead("remote", 99_999));
    runtime.pump();

    assert_eq!(row_ids(runtime.model()), vec!["remote", "lead-0", "lead-1"]);
    assert_eq!(runtime.model().selected_lead_ids(), vec![id(1)]);
}

#[test]
fn test_redraw_flag_accumulates() {
    let (_store, mut runtime) = mounted_runtime(2);
    runtime.take_redraw();
    runtime.dispatch(Msg::select_cell(0, 0, false));
    assert!(runtime.take_redraw());
    assert!(!runtime.take_redraw());
}
