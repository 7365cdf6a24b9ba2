//! Scripted replay against a mounted grid

mod common;

use common::{mounted_runtime, row_ids};
use lead_grid::script::{load_seed, parse_script};
use lead_grid::view::render_text;

#[test]
fn test_script_replay_end_to_end() {
    let (store, mut runtime) = mounted_runtime(5);
    let script = parse_script(
        r#"
- edit: { row: 0, col: 2, value: "Top prospect" }
- drag_column: { index: 0, moves: [30, 60] }
- select: { row: 3, col: 0 }
- extend: { row: 4, col: 1 }
- delete_selected
- insert: { id: "remote-1", company_name: "Globex" }
"#,
    )
    .unwrap();

    for action in script {
        assert!(action.apply(&mut runtime));
    }

    let model = runtime.model();
    assert_eq!(model.leads.get(0).unwrap().description, "Top prospect");
    assert_eq!(model.geometry.column_width(0), Some(210.0));
    assert_eq!(
        row_ids(model),
        vec!["lead-0", "lead-1", "lead-2", "remote-1"]
    );
    assert_eq!(store.leads().len(), 4);

    let text = render_text(model);
    assert!(text.contains("Globex"));
    assert!(text.contains("4 leads"));
}

#[test]
fn test_load_seed_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leads.json");
    std::fs::write(
        &path,
        r#"[
            {"id": "a", "company_name": "Acme", "company_phone_2": "+1 555",
             "created_at": "2024-05-01T10:00:00Z", "last_updated": "2024-05-01T10:00:00Z"},
            {"id": "b", "created_at": "2024-05-02T10:00:00Z", "last_updated": "2024-05-02T10:00:00Z"}
        ]"#,
    )
    .unwrap();

    let leads = load_seed(&path).unwrap();
    assert_eq!(leads.len(), 2);
    assert_eq!(leads[0].company_phone_2, "+1 555");
    assert_eq!(leads[1].company_name, "");
}

#[test]
fn test_load_seed_reports_bad_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leads.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = load_seed(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse seed"));
}
