use ai::chat_completions::{ChatCompletion, ChatCompletionMessage, ChatCompletionRequestBuilder};

use super::AiClient;
use crate::prelude::{Error, Result};

#[async_trait::async_trait]
pub trait GenerateOps: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

#[async_trait::async_trait]
impl GenerateOps for AiClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatCompletionRequestBuilder::default()
            .model(&self.chat_model)
            .messages(vec![ChatCompletionMessage::User(prompt.to_string().into())])
            .build()
            .map_err(|e| Error::CompletionRequest(e.to_string()))?;
        let response = self
            .client
            .chat_completions(&request)
            .await
            .map_err(|e| Error::Completion(e.to_string()))?;
        answer_from(response.choices.into_iter().map(|choice| choice.message.content))
    }
}

/// Content of the first choice.
fn answer_from(contents: impl IntoIterator<Item = Option<String>>) -> Result<String> {
    contents
        .into_iter()
        .next()
        .flatten()
        .ok_or(Error::EmptyCompletion)
}
