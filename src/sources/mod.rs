//! Rotating-category source adapters.

pub mod static_table;

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;

use crate::model::RotatingCategory;

/// Produces the rotating-category overlay: card id mapped to a full
/// four-quarter calendar for the current year. Adapters are interchangeable;
/// the pipeline calls `fetch` at most once per run and treats an empty
/// result as a soft failure (the merge is skipped, the baseline stands).
#[async_trait]
pub trait RotatingSource: Send + Sync {
    async fn fetch(&self) -> Result<HashMap<String, Vec<RotatingCategory>>>;
}
