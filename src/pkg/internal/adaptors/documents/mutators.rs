use sqlx::{PgConnection, Postgres, QueryBuilder};

use crate::{
    pkg::internal::adaptors::documents::spec::{DocumentEntry, NewDocument},
    prelude::Result,
};

pub struct DocumentMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> DocumentMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        DocumentMutator { pool }
    }

    /// Single multi-row insert for every document, in input order.
    pub fn insert_query(documents: Vec<NewDocument>) -> QueryBuilder<'static, Postgres> {
        let mut query_builder =
            QueryBuilder::new("INSERT INTO documents (content, embedding) ");
        query_builder.push_values(documents, |mut b, document| {
            b.push_bind(document.content).push_bind(document.embedding);
        });
        query_builder.push(" RETURNING id, content");
        query_builder
    }

    pub async fn bulk_create(&mut self, documents: Vec<NewDocument>) -> Result<Vec<DocumentEntry>> {
        if documents.is_empty() {
            return Ok(Vec::new());
        }
        let mut query_builder = Self::insert_query(documents);
        let rows = query_builder
            .build_query_as::<DocumentEntry>()
            .fetch_all(&mut *self.pool)
            .await?;
        Ok(rows)
    }
}
