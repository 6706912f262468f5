//! Command handlers for the `treelens` binary.

pub mod export;
pub mod print;
pub mod view;

use anyhow::{Context, Result};

use treelens::application::{Explorer, ExplorerSettings};
use treelens::domain::entities::{DataEnvelope, LabelOverrides, SchemaNode};
use treelens::infrastructure::{load_labels, load_schema, read_document};

use crate::cli::SourceArgs;

/// Explorer loaded from the command's inputs, plus the explicit schema
/// (kept so reloads can re-attach it)
pub(crate) fn open_explorer(
    source: &SourceArgs,
    settings: ExplorerSettings,
) -> Result<(Explorer, Option<SchemaNode>)> {
    let schema = source
        .schema
        .as_deref()
        .map(load_schema)
        .transpose()
        .context("failed to load schema")?;

    let labels = source
        .labels
        .as_deref()
        .map(load_labels)
        .transpose()?
        .unwrap_or_else(LabelOverrides::new);

    let document = read_document(&source.file)?;
    let envelope = DataEnvelope::from_document(document).with_schema(schema.clone());

    let mut explorer = Explorer::new(settings, labels);
    explorer.load(envelope);
    Ok((explorer, schema))
}
