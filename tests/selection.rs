//! Cell, range, row and whole-grid selection tests

mod common;

use std::collections::BTreeSet;

use common::test_model;
use lead_grid::messages::{Msg, SelectionMsg};
use lead_grid::model::{column_count, CellPosition, SelectionKind};
use lead_grid::update::update;

fn cells(model: &lead_grid::model::GridModel) -> BTreeSet<(usize, usize)> {
    model.selection.cells().map(|p| (p.row, p.col)).collect()
}

fn rect(rows: std::ops::RangeInclusive<usize>, cols: std::ops::RangeInclusive<usize>) -> BTreeSet<(usize, usize)> {
    rows.flat_map(|r| cols.clone().map(move |c| (r, c))).collect()
}

#[test]
fn test_single_click_selects_exactly_one_cell() {
    let mut model = test_model(5);
    update(&mut model, Msg::select_cell(2, 3, false));

    assert_eq!(cells(&model), BTreeSet::from([(2, 3)]));
    assert_eq!(model.selection.anchor(), Some(CellPosition::new(2, 3)));
    assert_eq!(model.selection.kind(), SelectionKind::SingleCell);
}

#[test]
fn test_new_click_replaces_selection() {
    let mut model = test_model(5);
    update(&mut model, Msg::select_cell(1, 1, false));
    update(&mut model, Msg::select_cell(3, 0, false));
    assert_eq!(cells(&model), BTreeSet::from([(3, 0)]));
}

#[test]
fn test_shift_click_extends_from_retained_anchor() {
    let mut model = test_model(5);
    update(&mut model, Msg::select_cell(1, 1, false));
    update(&mut model, Msg::select_cell(3, 3, true));

    assert_eq!(cells(&model), rect(1..=3, 1..=3));
    assert_eq!(model.selection.kind(), SelectionKind::Range);

    update(&mut model, Msg::select_cell(0, 0, true));
    assert_eq!(cells(&model), rect(0..=3, 0..=3));
    assert_eq!(model.selection.anchor(), Some(CellPosition::new(1, 1)));
}

#[test]
fn test_shift_click_on_empty_selection_acts_as_click() {
    let mut model = test_model(5);
    update(&mut model, Msg::select_cell(2, 2, true));
    assert_eq!(cells(&model), BTreeSet::from([(2, 2)]));
    assert_eq!(model.selection.anchor(), Some(CellPosition::new(2, 2)));
}

#[test]
fn test_select_row_covers_every_column() {
    let mut model = test_model(4);
    update(&mut model, Msg::select_row(2));

    assert_eq!(cells(&model), rect(2..=2, 0..=column_count() - 1));
    assert_eq!(model.selection.anchor(), Some(CellPosition::new(2, 0)));
    assert_eq!(model.selection.kind(), SelectionKind::FullRows);
    assert!(model.selection.row_has_selection(2));
    assert!(!model.selection.row_has_selection(1));
}

#[test]
fn test_selecting_another_row_does_not_merge() {
    let mut model = test_model(4);
    update(&mut model, Msg::select_row(0));
    update(&mut model, Msg::select_row(3));
    assert_eq!(model.selection.selected_rows(), vec![3]);
}

#[test]
fn test_select_all_yields_full_cross_product() {
    let mut model = test_model(7);
    update(&mut model, Msg::select_all());

    assert_eq!(model.selection.len(), 7 * column_count());
    assert_eq!(model.selection.anchor(), Some(CellPosition::new(0, 0)));
    assert_eq!(model.selection.selected_rows(), (0..7).collect::<Vec<_>>());
}

#[test]
fn test_select_all_on_empty_grid_stays_empty() {
    let mut model = test_model(0);
    update(&mut model, Msg::select_all());
    assert!(model.selection.is_empty());
    assert!(!model.can_delete());
}

#[test]
fn test_clear_and_delete_affordance() {
    let mut model = test_model(3);
    assert!(!model.can_delete());
    update(&mut model, Msg::select_cell(0, 0, false));
    assert!(model.can_delete());
    update(&mut model, Msg::Selection(SelectionMsg::Clear));
    assert!(!model.can_delete());
    assert_eq!(model.selection.kind(), SelectionKind::Empty);
}

#[test]
fn test_out_of_bounds_clicks_are_ignored() {
    let mut model = test_model(3);
    update(&mut model, Msg::select_cell(1, 1, false));
    assert!(update(&mut model, Msg::select_cell(3, 0, false)).is_none());
    assert!(update(&mut model, Msg::select_cell(0, column_count(), true)).is_none());
    assert!(update(&mut model, Msg::select_row(9)).is_none());
    assert_eq!(cells(&model), BTreeSet::from([(1, 1)]));
}

#[test]
fn test_selected_lead_ids_follow_rows() {
    let mut model = test_model(5);
    update(&mut model, Msg::select_cell(1, 0, false));
    update(&mut model, Msg::select_cell(3, 4, true));
    let ids: Vec<String> = model
        .selected_lead_ids()
        .into_iter()
        .map(|id| id.to_string())
        .collect();
    assert_eq!(ids, vec!["lead-1", "lead-2", "lead-3"]);
}
