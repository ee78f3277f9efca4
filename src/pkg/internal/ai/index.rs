use ai::embeddings::{Embeddings, EmbeddingsRequestBuilder};
use pgvector::Vector;

use super::AiClient;
use crate::prelude::{Error, Result};

#[async_trait::async_trait]
pub trait IndexOps: Send + Sync {
    async fn embed(&self, content: &str) -> Result<Vector>;
}

#[async_trait::async_trait]
impl IndexOps for AiClient {
    async fn embed(&self, content: &str) -> Result<Vector> {
        let request = EmbeddingsRequestBuilder::default()
            .model(&self.embedding_model)
            .input(vec![content.to_string()])
            .build()
            .map_err(|e| Error::Embedding(e.to_string()))?;
        let response = self
            .client
            .create_embeddings(&request)
            .await
            .map_err(|e| Error::Embedding(e.to_string()))?;
        let embedding = first_embedding(
            response
                .data
                .into_iter()
                .map(|d| d.embedding.iter().map(|&x| x as f32).collect()),
        )?;
        tracing::debug!(
            "embedded {} chars into {} dims",
            content.chars().count(),
            embedding.as_slice().len()
        );
        Ok(embedding)
    }
}

/// Only the first entry is used; one input is sent per request.
fn first_embedding(data: impl IntoIterator<Item = Vec<f32>>) -> Result<Vector> {
    data.into_iter()
        .next()
        .map(Vector::from)
        .ok_or_else(|| Error::Embedding("response contained no embeddings".into()))
}
