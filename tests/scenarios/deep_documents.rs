//! Scenario: Navigating a deep document
//!
//! Journey: A user opens a document nested fifteen levels deep, expands
//! everything, hits the depth budget, and asks to go deeper.
//!
//! Success Criteria:
//! - Rendering stops at the budget with an "expand deeper" row
//! - Expanding deeper reveals the next levels
//! - Bare scalars and empty envelopes show placeholders

use treelens::application::{Explorer, ExplorerView};
use treelens::domain::entities::LabelOverrides;
use treelens::domain::services::RowKind;
use treelens::infrastructure::load_envelope;
use treelens::{Config, DataEnvelope};

use crate::common::*;

fn explorer() -> Explorer {
    Explorer::new(Config::default().explorer_settings(), LabelOverrides::new())
}

#[test]
fn scenario_depth_budget_and_expand_deeper() {
    let mut explorer = explorer();
    explorer.load(DataEnvelope::from_payload(nested(15)));
    explorer.expand_all();

    let ExplorerView::Tree(rows) = explorer.view() else {
        panic!("expected tree");
    };
    let last = rows.last().unwrap();
    assert!(matches!(last.kind, RowKind::ExpandDeeper));
    assert_eq!(last.depth, 10);
    assert!(rows.iter().all(|row| !matches!(row.kind, RowKind::Leaf { .. })));

    assert_eq!(explorer.expand_deeper(), 15);
    let ExplorerView::Tree(rows) = explorer.view() else {
        panic!("expected tree");
    };
    let leaf = rows.last().unwrap();
    match &leaf.kind {
        RowKind::Leaf { label, value } => {
            assert_eq!(label, "k14");
            assert_eq!(value.text, "v");
        }
        other => panic!("expected leaf, got {:?}", other),
    }
    assert_eq!(leaf.depth, 15);
}

#[test]
fn scenario_placeholders_for_unusable_documents() {
    let env = TestEnv::new();

    let scalar = env.write("scalar.json", SCALAR);
    let mut explorer = explorer();
    explorer.load(load_envelope(&scalar, None).unwrap());
    assert_eq!(explorer.view().placeholder(), Some("Invalid data"));

    let empty = env.write("empty.json", NO_PAYLOAD);
    explorer.load(load_envelope(&empty, None).unwrap());
    assert_eq!(explorer.view().placeholder(), Some("No data yet"));
}

#[test]
fn scenario_yaml_documents_load_like_json() {
    let env = TestEnv::new();
    let file = env.write("doc.yaml", "payload:\n  - a: 1\n    b: x\n  - a: 2\n    b: y\n");

    let mut explorer = explorer();
    explorer.load(load_envelope(&file, None).unwrap());
    assert!(explorer.is_tabular());
}
