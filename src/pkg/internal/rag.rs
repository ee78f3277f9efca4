use super::{
    adaptors::documents::spec::{DocumentEntry, NewDocument},
    ai::{generate::GenerateOps, index::IndexOps, prompt::join_context},
    store::DocumentStore,
};
use crate::{conf::PromptTemplate, prelude::Result};

#[derive(Debug, Clone, Copy)]
pub struct RagOptions {
    pub top_k: usize,
    pub prompt_template: PromptTemplate,
    /// Width of the `documents.embedding` column, when known.
    pub embedding_dimensions: Option<usize>,
}

/// Load, search and answer over one embedder, one completion model and one
/// document store. Every step runs to completion before the next starts.
pub struct Rag<'a> {
    embedder: &'a dyn IndexOps,
    generator: &'a dyn GenerateOps,
    store: &'a dyn DocumentStore,
    options: RagOptions,
}

impl<'a> Rag<'a> {
    pub fn new(
        embedder: &'a dyn IndexOps,
        generator: &'a dyn GenerateOps,
        store: &'a dyn DocumentStore,
        options: RagOptions,
    ) -> Self {
        Rag {
            embedder,
            generator,
            store,
            options,
        }
    }

    /// Embeds each text in turn and stores all of them with one insert.
    /// Nothing is written if any embedding fails or is invalid.
    pub async fn insert_documents(&self, texts: &[String]) -> Result<Vec<DocumentEntry>> {
        if texts.is_empty() {
            tracing::debug!("no documents to insert");
            return Ok(Vec::new());
        }
        let mut documents = Vec::with_capacity(texts.len());
        for text in texts {
            let document = NewDocument {
                content: text.clone(),
                embedding: self.embedder.embed(text).await?,
            };
            document.check_width(self.options.embedding_dimensions)?;
            documents.push(document);
        }
        let rows = self.store.insert(documents).await?;
        tracing::info!("inserted {} documents", rows.len());
        Ok(rows)
    }

    pub async fn search_similar(&self, question: &str, top_k: usize) -> Result<Vec<String>> {
        let embedding = self.embedder.embed(question).await?;
        let results = self.store.nearest(&embedding, top_k).await?;
        tracing::debug!("found {} of {} requested documents", results.len(), top_k);
        Ok(results)
    }

    pub async fn generate_answer(&self, question: &str) -> Result<String> {
        let passages = self.search_similar(question, self.options.top_k).await?;
        if passages.is_empty() {
            tracing::warn!("no context found, asking without it");
        }
        let context = join_context(&passages);
        let prompt = self.options.prompt_template.render(&context, question);
        self.generator.complete(&prompt).await
    }
}
