//! Domain Services
//!
//! Pure explorer logic over payloads and schemas. Nothing here performs I/O
//! and nothing here fails: malformed input degrades instead of erroring
//! (CSV writing is the one fallible step).

pub mod classifier;
pub mod exporter;
pub mod expansion;
pub mod format;
pub mod label_resolver;
pub mod search;
pub mod table_renderer;
pub mod tree_renderer;
pub mod window;

pub use classifier::{is_tabular, table_keys};
pub use exporter::{csv_field, export_csv, export_json, Artifact, ExportFormat};
pub use expansion::{contains_match, initialize, recompute_for_search, ExpansionSet, MatchOutcome};
pub use format::{format_leaf, format_leaf_in, FormattedValue};
pub use label_resolver::{column_label, item_noun, title_for, LabelResolver, DEFAULT_ITEM_NOUN};
pub use search::{searchable_text, SearchFilter};
pub use table_renderer::{cell_clipboard_text, columns, render_table, TableCell, TableColumn, TableRow, TableView};
pub use tree_renderer::{RenderedRow, RowKind, TreeRenderer, DEFAULT_MAX_DEPTH, DEPTH_STEP};
pub use window::{chunk_size_for, initial_visible, WindowPolicy, WindowState};
