//! Catalog publishing: local snapshot file or document-store batch replace.

pub mod snapshot;
pub mod store;

use anyhow::Result;
use serde_json::{Map, Value};
use tracing::info;

use crate::model::Card;
use crate::publish::store::CardStore;

/// Serialize every card and submit the whole set to the store as one atomic
/// batch. One document per card id; a re-run replaces documents wholesale.
pub async fn publish_catalog(cards: &[Card], store: &dyn CardStore) -> Result<usize> {
    let mut documents = Map::new();
    for card in cards {
        documents.insert(card.id.clone(), card.to_published());
    }

    let count = documents.len();
    store.replace_all(Value::Object(documents)).await?;
    info!(count, "published catalog to store");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingStore {
        received: Mutex<Option<Value>>,
    }

    #[async_trait]
    impl CardStore for RecordingStore {
        async fn replace_all(&self, documents: Value) -> Result<()> {
            *self.received.lock().unwrap() = Some(documents);
            Ok(())
        }
    }

    #[tokio::test]
    async fn one_document_per_card_keyed_by_id() {
        let store = RecordingStore {
            received: Mutex::new(None),
        };
        let cards = crate::catalog::baseline();

        let count = publish_catalog(&cards, &store).await.unwrap();
        assert_eq!(count, cards.len());

        let received = store.received.lock().unwrap().take().unwrap();
        let documents = received.as_object().unwrap();
        assert_eq!(documents.len(), cards.len());
        for card in &cards {
            assert_eq!(documents[&card.id]["id"], serde_json::json!(card.id));
        }
    }

    #[tokio::test]
    async fn store_error_fails_the_publish() {
        struct FailingStore;

        #[async_trait]
        impl CardStore for FailingStore {
            async fn replace_all(&self, _documents: Value) -> Result<()> {
                anyhow::bail!("store unreachable")
            }
        }

        let result = publish_catalog(&crate::catalog::baseline(), &FailingStore).await;
        assert!(result.is_err());
    }
}
