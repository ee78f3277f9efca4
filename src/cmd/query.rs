use crate::{
    pkg::internal::{
        ai::AiClient,
        rag::{Rag, RagOptions},
        store::PgDocumentStore,
    },
    prelude::Result,
};

pub async fn ingest(
    ai: &AiClient,
    store: &PgDocumentStore,
    options: RagOptions,
    texts: &[String],
) -> Result<()> {
    let rows = Rag::new(ai, ai, store, options)
        .insert_documents(texts)
        .await?;
    for row in &rows {
        tracing::debug!("stored document {}: {}", row.id, row.content);
    }
    println!("Inserted {} documents", rows.len());
    Ok(())
}

pub async fn search(
    ai: &AiClient,
    store: &PgDocumentStore,
    options: RagOptions,
    question: &str,
    top_k: usize,
) -> Result<()> {
    let results = Rag::new(ai, ai, store, options)
        .search_similar(question, top_k)
        .await?;
    for content in results {
        println!("{}", content);
    }
    Ok(())
}

pub async fn ask(
    ai: &AiClient,
    store: &PgDocumentStore,
    options: RagOptions,
    question: &str,
) -> Result<()> {
    let answer = Rag::new(ai, ai, store, options)
        .generate_answer(question)
        .await?;
    println!("{}", answer);
    Ok(())
}
