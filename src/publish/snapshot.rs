//! Local snapshot file, mainly for eyeballing a run before publishing.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::info;

use crate::model::Card;

/// Write the catalog as a pretty-printed JSON array of published documents,
/// in baseline declaration order. Overwrites any existing file.
pub fn write_snapshot(cards: &[Card], path: &Path) -> Result<usize> {
    let documents: Vec<Value> = cards.iter().map(Card::to_published).collect();

    let body = serde_json::to_string_pretty(&documents)
        .context("Failed to serialize catalog snapshot")?;
    fs::write(path, body)
        .with_context(|| format!("Failed to write snapshot file: {}", path.display()))?;

    info!(count = cards.len(), path = %path.display(), "wrote catalog snapshot");
    Ok(cards.len())
}
