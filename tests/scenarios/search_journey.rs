//! Scenario: Finding a record in a nested document
//!
//! Journey: A user opens a team document, searches for "Bob", then clears
//! the search and keeps exploring.
//!
//! Success Criteria:
//! - Only the branch holding the match is opened
//! - Clearing the search does not collapse what is open
//! - Schema titles and label overrides name the rows

use serde_json::json;

use treelens::application::{Explorer, ExplorerView};
use treelens::domain::entities::LabelOverrides;
use treelens::domain::services::RowKind;
use treelens::infrastructure::{load_envelope, load_labels};
use treelens::Config;

use crate::common::*;

fn labels_of(view: &ExplorerView<'_>) -> Vec<String> {
    match view {
        ExplorerView::Tree(rows) => rows
            .iter()
            .filter_map(|row| match &row.kind {
                RowKind::Header { label, .. } | RowKind::Leaf { label, .. } => Some(label.clone()),
                _ => None,
            })
            .collect(),
        other => panic!("expected tree, got {:?}", other),
    }
}

#[test]
fn scenario_search_for_bob_opens_only_his_branch() {
    let env = TestEnv::new();
    let file = env.write("people.json", PEOPLE);

    let mut explorer = Explorer::new(Config::default().explorer_settings(), LabelOverrides::new());
    explorer.load(load_envelope(&file, None).unwrap());

    // Objects start collapsed below the root
    assert_eq!(labels_of(&explorer.view()), vec!["team", "size"]);

    explorer.set_search("bob");
    let open: Vec<&str> = explorer.expansion().iter().map(|a| a.as_str()).collect();
    assert_eq!(
        open,
        vec!["root", "root.team", "root.team.members", "root.team.members.1"]
    );

    let labels = labels_of(&explorer.view());
    assert!(labels.contains(&"name".to_string()));
    assert!(!labels.contains(&"lead".to_string()));
    assert!(!labels.contains(&"size".to_string()));

    // Clearing keeps the branch open and shows every key again
    explorer.set_search("");
    let labels = labels_of(&explorer.view());
    assert_eq!(labels[0], "team");
    assert!(labels.contains(&"Item 1:".to_string()));
    assert!(labels.contains(&"size".to_string()));
}

#[test]
fn scenario_labels_and_schema_titles() {
    let env = TestEnv::new();
    let file = env.write("envelope.json", RESULT_WRAPPED);
    let labels_file = env.write("labels.json", r#"{"status": "Current status", "ignored": 3}"#);

    let labels = load_labels(&labels_file).unwrap();
    let mut explorer = Explorer::new(Config::default().explorer_settings(), labels);
    explorer.load(load_envelope(&file, None).unwrap());

    // Override beats the schema title
    assert_eq!(labels_of(&explorer.view()), vec!["Current status"]);

    let mut plain = Explorer::new(Config::default().explorer_settings(), LabelOverrides::new());
    plain.load(load_envelope(&file, None).unwrap());
    assert_eq!(labels_of(&plain.view()), vec!["Status"]);
}

#[test]
fn scenario_reload_resets_view_state() {
    let mut explorer = Explorer::new(Config::default().explorer_settings(), LabelOverrides::new());
    explorer.load(treelens::DataEnvelope::from_payload(json!([{"a": 1}, {"a": 2}])));
    explorer.set_search("2");
    assert!(explorer.toggle_view_mode());
    explorer.expand_deeper();

    explorer.load(treelens::DataEnvelope::from_payload(json!([{"a": 3}])));
    assert_eq!(explorer.search(), "");
    assert!(!explorer.mode().is_table());
    assert_eq!(explorer.max_depth(), 10);
}
