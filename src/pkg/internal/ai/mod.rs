pub mod generate;
pub mod index;
pub mod prompt;

use std::sync::Arc;

use ai::clients::openai::Client;

use crate::{
    conf::Settings,
    prelude::{Error, Result},
};

/// OpenAI-compatible client bound to the configured chat and embedding models.
#[derive(Debug, Clone)]
pub struct AiClient {
    client: Arc<Client>,
    chat_model: String,
    embedding_model: String,
}

impl AiClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::from_url(&settings.openai_api_key, &settings.ai_endpoint)
            .map_err(|e| Error::Client(e.to_string()))?;
        tracing::debug!(
            "ai client for {} (chat: {}, embeddings: {})",
            settings.ai_endpoint,
            settings.ai_model,
            settings.embedding_model
        );
        Ok(AiClient {
            client: Arc::new(client),
            chat_model: settings.ai_model.clone(),
            embedding_model: settings.embedding_model.clone(),
        })
    }
}
