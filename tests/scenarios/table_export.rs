//! Scenario: Exporting a table
//!
//! Journey: A user loads an array of records, switches to the table view,
//! pages through it, and exports CSV and JSON.
//!
//! Success Criteria:
//! - Column headers come from the item schema
//! - Exports cover every row, not just the visible window
//! - Existing artifacts are never clobbered silently

use serde_json::json;

use treelens::application::{Explorer, ExplorerView};
use treelens::domain::entities::LabelOverrides;
use treelens::domain::ports::ArtifactSink;
use treelens::infrastructure::{load_envelope, DirectorySink, OverwritePolicy};
use treelens::{Config, DataEnvelope, TreelensError};

use crate::common::*;

#[test]
fn scenario_csv_matches_reference_output() {
    let env = TestEnv::new();
    let file = env.write("rows.json", ROWS);

    let mut explorer = Explorer::new(Config::default().explorer_settings(), LabelOverrides::new());
    explorer.load(load_envelope(&file, None).unwrap());

    // CSV only exists in table view
    assert!(explorer.export_csv().unwrap().is_none());
    assert!(explorer.toggle_view_mode());

    let artifact = explorer.export_csv().unwrap().unwrap();
    let sink = DirectorySink::new(env.root.path(), OverwritePolicy::Refuse);
    let written = sink.deliver(&artifact).unwrap();

    assert_eq!(written, env.path("data.csv"));
    assert_eq!(env.read("data.csv"), "a,b\n1,x\n2,y\n");

    // A second export must not overwrite
    let err = sink.deliver(&artifact).unwrap_err();
    assert!(matches!(err, TreelensError::OverwriteDeclined { .. }));
}

#[test]
fn scenario_schema_titles_become_columns() {
    let env = TestEnv::new();
    let file = env.write("customers.json", ROWS_ENVELOPE);

    let mut explorer = Explorer::new(Config::default().explorer_settings(), LabelOverrides::new());
    explorer.load(load_envelope(&file, None).unwrap());
    assert!(explorer.toggle_view_mode());

    match explorer.view() {
        ExplorerView::Table(table) => {
            let labels: Vec<&str> = table.columns.iter().map(|c| c.label.as_str()).collect();
            assert_eq!(labels, vec!["Customer ID", "Name"]);
            assert_eq!(table.rows.len(), 2);
        }
        other => panic!("expected table, got {:?}", other),
    }

    let artifact = explorer.export_csv().unwrap().unwrap();
    assert_eq!(artifact.contents, "Customer ID,Name\n7,Ada\n9,Bob\n");
}

#[test]
fn scenario_export_ignores_window() {
    let rows: Vec<_> = (1..=450).map(|n| json!({"n": n})).collect();
    let mut explorer = Explorer::new(Config::default().explorer_settings(), LabelOverrides::new());
    explorer.load(DataEnvelope::from_payload(json!(rows)));
    assert!(explorer.toggle_view_mode());

    match explorer.view() {
        ExplorerView::Table(table) => assert_eq!((table.visible, table.total), (100, 450)),
        other => panic!("expected table, got {:?}", other),
    }
    assert_eq!(explorer.show_more_rows(), Some(300));
    assert_eq!(explorer.show_more_rows(), Some(450));
    assert_eq!(explorer.show_more_rows(), Some(450));

    let csv = explorer.export_csv().unwrap().unwrap();
    assert_eq!(csv.contents.lines().count(), 451);

    let json = explorer.export_json().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json.contents).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 450);
}

#[test]
fn scenario_rename_policy_keeps_both_exports() {
    let env = TestEnv::new();
    let mut explorer = Explorer::new(Config::default().explorer_settings(), LabelOverrides::new());
    explorer.load(DataEnvelope::from_payload(json!({"a": 1})));

    let sink = DirectorySink::new(env.root.path(), OverwritePolicy::Rename);
    let artifact = explorer.export_json().unwrap();
    let first = sink.deliver(&artifact).unwrap();
    let second = sink.deliver(&artifact).unwrap();

    assert_ne!(first, second);
    assert!(env.exists("data.json"));
    assert!(env.exists("data-1.json"));
}
