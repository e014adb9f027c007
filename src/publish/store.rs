//! Document-store client.
//!
//! The backend exposes a batch-replace endpoint for the `cards` collection:
//! one POST carrying the complete document map, applied all-or-nothing so
//! readers never observe a partially updated catalog. Authentication is the
//! deployment's concern, not modeled here.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[async_trait]
pub trait CardStore: Send + Sync {
    /// Replace the entire `cards` collection with `documents`, an object
    /// keyed by card id. No internal retries; errors fail the run.
    async fn replace_all(&self, documents: Value) -> Result<()>;
}

pub struct HttpCardStore {
    base_url: String,
    client: reqwest::Client,
}

impl HttpCardStore {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("cardsync/0.1")
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(HttpCardStore {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[async_trait]
impl CardStore for HttpCardStore {
    async fn replace_all(&self, documents: Value) -> Result<()> {
        let url = format!("{}/collections/cards/batch", self.base_url);
        debug!(url = %url, "submitting catalog batch");

        let response = self
            .client
            .post(&url)
            .json(&json!({ "documents": documents }))
            .send()
            .await
            .context("Failed to reach the card store")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("Card store rejected the batch ({status}): {body}");
        }

        debug!("card store accepted the batch");
        Ok(())
    }
}
