use pgvector::Vector;
use sqlx::PgConnection;

use crate::{conf::DistanceMetric, prelude::Result};

pub struct DocumentSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> DocumentSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        DocumentSelector { pool }
    }

    pub fn nearest_query(metric: DistanceMetric) -> String {
        format!(
            "SELECT content FROM documents ORDER BY embedding {} $1 LIMIT $2",
            metric.operator()
        )
    }

    /// Declared width of `documents.embedding`, `None` for an unsized `vector`.
    pub async fn embedding_width(&mut self) -> Result<Option<usize>> {
        let typmod = sqlx::query_scalar::<_, i32>(
            "SELECT atttypmod FROM pg_attribute \
             WHERE attrelid = 'documents'::regclass AND attname = 'embedding'",
        )
        .fetch_optional(&mut *self.pool)
        .await?;
        Ok(typmod.and_then(width_from_typmod))
    }

    /// Contents of the `limit` rows closest to `embedding`, nearest first.
    pub async fn nearest(
        &mut self,
        embedding: &Vector,
        metric: DistanceMetric,
        limit: i64,
    ) -> Result<Vec<String>> {
        let query = Self::nearest_query(metric);
        let rows = sqlx::query_scalar::<_, String>(&query)
            .bind(embedding)
            .bind(limit)
            .fetch_all(&mut *self.pool)
            .await?;
        Ok(rows)
    }
}

/// pgvector stores the declared dimension as the column typmod; -1 means unsized.
fn width_from_typmod(typmod: i32) -> Option<usize> {
    usize::try_from(typmod).ok().filter(|&width| width > 0)
}
