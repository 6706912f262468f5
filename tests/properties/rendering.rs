//! Property tests for the tree renderer and exporter.

use proptest::prelude::*;

use treelens::application::{Explorer, ExplorerSettings, ExplorerView};
use treelens::domain::entities::{DataEnvelope, LabelOverrides};
use treelens::domain::services::RowKind;

use crate::common::strategies::{payload, tabular};

fn explorer_for(value: serde_json::Value) -> Explorer {
    let mut explorer = Explorer::new(ExplorerSettings::default(), LabelOverrides::new());
    explorer.load(DataEnvelope::from_payload(value));
    explorer
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Rendering any payload never panics and rows stay within the depth budget.
    #[test]
    fn property_rows_respect_depth_budget(value in payload(), needle in "[a-z]{0,2}") {
        let mut explorer = explorer_for(value);
        explorer.set_search(needle);
        explorer.expand_all();
        if let ExplorerView::Tree(rows) = explorer.view() {
            for row in rows {
                if matches!(row.kind, RowKind::ExpandDeeper) {
                    prop_assert_eq!(row.depth, explorer.max_depth());
                } else {
                    prop_assert!(row.depth <= explorer.max_depth() + 1);
                }
            }
        }
    }

    /// PROPERTY: JSON export re-parses to the loaded payload.
    #[test]
    fn property_json_export_preserves_payload(value in payload()) {
        let explorer = explorer_for(value.clone());
        if value.is_null() {
            prop_assert!(explorer.export_json().is_none());
        } else {
            let artifact = explorer.export_json().unwrap();
            let parsed: serde_json::Value = serde_json::from_str(&artifact.contents).unwrap();
            prop_assert_eq!(parsed, value);
        }
    }

    /// PROPERTY: CSV export of a tabular payload has one line per row plus the header.
    #[test]
    fn property_csv_has_header_plus_rows(rows in tabular()) {
        let mut explorer = explorer_for(rows.clone());
        prop_assert!(explorer.toggle_view_mode());
        let artifact = explorer.export_csv().unwrap().unwrap();
        let mut reader = csv::ReaderBuilder::new().from_reader(artifact.contents.as_bytes());
        let records = reader.records().count();
        prop_assert_eq!(records, rows.as_array().unwrap().len());
    }
}
