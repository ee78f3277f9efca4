use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("ERR-CONF-000: improperly configured: {0}")]
    Config(#[from] config::ConfigError),
    #[error("ERR-DB-000: {0}")]
    Database(#[from] sqlx::Error),
    #[error("ERR-DB-001: migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("ERR-AI-000: could not create ai client: {0}")]
    Client(String),
    #[error("ERR-AI-001: invalid completion request: {0}")]
    CompletionRequest(String),
    #[error("ERR-AI-002: completion failed: {0}")]
    Completion(String),
    #[error("ERR-AI-003: completion response had no content")]
    EmptyCompletion,
    #[error("ERR-AI-004: embedding failed: {0}")]
    Embedding(String),
    #[error("ERR-AI-005: empty embedding returned for {0:?}")]
    EmptyEmbedding(String),
    #[error("ERR-AI-006: embedding has {actual} dimensions, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
}
