use pgvector::Vector;
use sqlx::{postgres::PgConnectOptions, Connection, PgConnection};

use super::adaptors::documents::{
    mutators::DocumentMutator,
    selectors::DocumentSelector,
    spec::{DocumentEntry, NewDocument},
};
use crate::{conf::DistanceMetric, prelude::Result};

#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts every document in one statement and commits. Embeddings that do
    /// not fit the stored column are rejected before anything is written.
    async fn insert(&self, documents: Vec<NewDocument>) -> Result<Vec<DocumentEntry>>;

    /// Contents of the `limit` stored documents nearest to `embedding`.
    async fn nearest(&self, embedding: &Vector, limit: usize) -> Result<Vec<String>>;
}

/// Postgres-backed store. Every call opens its own connection and closes it
/// before returning; an early return drops the connection instead.
#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    options: PgConnectOptions,
    metric: DistanceMetric,
}

impl PgDocumentStore {
    pub fn new(options: PgConnectOptions, metric: DistanceMetric) -> Self {
        PgDocumentStore { options, metric }
    }

    pub async fn connect(&self) -> Result<PgConnection> {
        let conn = PgConnection::connect_with(&self.options).await?;
        tracing::debug!("connected to db");
        Ok(conn)
    }
}

#[async_trait::async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert(&self, documents: Vec<NewDocument>) -> Result<Vec<DocumentEntry>> {
        let mut conn = self.connect().await?;
        let width = DocumentSelector::new(&mut conn).embedding_width().await?;
        for document in &documents {
            document.check_width(width)?;
        }
        let mut tx = conn.begin().await?;
        let rows = DocumentMutator::new(&mut *tx).bulk_create(documents).await?;
        tx.commit().await?;
        conn.close().await?;
        Ok(rows)
    }

    async fn nearest(&self, embedding: &Vector, limit: usize) -> Result<Vec<String>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let mut conn = self.connect().await?;
        let rows = DocumentSelector::new(&mut conn)
            .nearest(embedding, self.metric, limit)
            .await?;
        conn.close().await?;
        Ok(rows)
    }
}
