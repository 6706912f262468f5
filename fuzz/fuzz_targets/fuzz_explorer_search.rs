#![no_main]

use libfuzzer_sys::fuzz_target;
use treelens::domain::value_objects::ViewMode;
use treelens::{DataEnvelope, Explorer, ExplorerSettings, LabelOverrides};

fuzz_target!(|data: &[u8]| {
    // First line is the search text, the rest the document
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let (search, document) = content.split_once('\n').unwrap_or(("", content));
    let Ok(value) = serde_json::from_str::<serde_json::Value>(document) else {
        return;
    };

    let mut explorer = Explorer::new(ExplorerSettings::default(), LabelOverrides::new());
    explorer.load(DataEnvelope::from_document(value));
    explorer.set_search(search);
    let _ = explorer.view();
    explorer.expand_all();
    explorer.set_view_mode(ViewMode::Table);
    let _ = explorer.view();
    let _ = explorer.export_json();
    let _ = explorer.export_csv();
});
