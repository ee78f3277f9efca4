use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use sqlx::postgres::PgConnectOptions;

use crate::pkg::internal::rag::RagOptions;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    Openai,
    Ollama,
    Gemini,
}

/// pgvector distance operators recognized for ordering search results.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    L2,
    Cosine,
    InnerProduct,
}

impl DistanceMetric {
    pub fn operator(&self) -> &'static str {
        match self {
            DistanceMetric::L2 => "<->",
            DistanceMetric::Cosine => "<=>",
            DistanceMetric::InnerProduct => "<#>",
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PromptTemplate {
    Dutch,
    English,
}

#[derive(Deserialize, Debug)]
pub struct Settings {
    pub pghost: String,
    pub pgport: u16,
    pub pgdatabase: Option<String>,
    pub pguser: Option<String>,
    pub pgpassword: Option<String>,
    pub openai_api_key: String,
    pub ai_provider: AiProvider,
    pub ai_endpoint: String,
    pub ai_model: String,
    pub embedding_model: String,
    pub embedding_dimensions: Option<usize>,
    pub top_k: usize,
    pub distance_metric: DistanceMetric,
    pub prompt_template: PromptTemplate,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_env(Environment::default())
    }

    pub fn from_env(env: Environment) -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .set_default("pghost", "localhost")?
            .set_default("pgport", 5432)?
            .set_default("openai_api_key", "")?
            .set_default("ai_provider", "openai")?
            .set_default("ai_endpoint", "")?
            .set_default("ai_model", "")?
            .set_default("embedding_model", "")?
            .set_default("top_k", 3)?
            .set_default("distance_metric", "l2")?
            .set_default("prompt_template", "dutch")?
            .add_source(env)
            .build()?;
        let mut s: Settings = conf.try_deserialize()?;
        let (endpoint, chat_model, embedding_model, dimensions) = match s.ai_provider {
            AiProvider::Openai => (
                "https://api.openai.com/v1",
                "gpt-4",
                "text-embedding-3-small",
                1536,
            ),
            AiProvider::Ollama => {
                if s.openai_api_key.is_empty() {
                    s.openai_api_key = "ollama".into();
                }
                (
                    "http://localhost:11434/v1",
                    "gemma3:12b",
                    "nomic-embed-text",
                    768,
                )
            }
            AiProvider::Gemini => (
                "https://generativelanguage.googleapis.com/v1beta/openai",
                "gemini-2.5-flash",
                "text-embedding-004",
                768,
            ),
        };
        if s.ai_endpoint.is_empty() {
            s.ai_endpoint = endpoint.into();
        }
        if s.ai_model.is_empty() {
            s.ai_model = chat_model.into();
        }
        // a known width only applies to the provider's own embedding model
        if s.embedding_model.is_empty() {
            s.embedding_model = embedding_model.into();
            if s.embedding_dimensions.is_none() {
                s.embedding_dimensions = Some(dimensions);
            }
        }
        Ok(s)
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        let mut opts = PgConnectOptions::new()
            .host(&self.pghost)
            .port(self.pgport);
        if let Some(database) = &self.pgdatabase {
            opts = opts.database(database);
        }
        if let Some(user) = &self.pguser {
            opts = opts.username(user);
        }
        if let Some(password) = &self.pgpassword {
            opts = opts.password(password);
        }
        opts
    }

    pub fn rag_options(&self) -> RagOptions {
        RagOptions {
            top_k: self.top_k,
            prompt_template: self.prompt_template,
            embedding_dimensions: self.embedding_dimensions,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_env(Environment::default().source(Some(source)))
    }

    #[test]
    fn defaults_match_openai_demo() {
        let s = settings(&[("OPENAI_API_KEY", "sk-test")]).unwrap();
        assert_eq!(s.pghost, "localhost");
        assert_eq!(s.pgport, 5432);
        assert_eq!(s.ai_provider, AiProvider::Openai);
        assert_eq!(s.ai_endpoint, "https://api.openai.com/v1");
        assert_eq!(s.ai_model, "gpt-4");
        assert_eq!(s.embedding_model, "text-embedding-3-small");
        assert_eq!(s.embedding_dimensions, Some(1536));
        assert_eq!(s.top_k, 3);
        assert_eq!(s.distance_metric, DistanceMetric::L2);
        assert_eq!(s.prompt_template, PromptTemplate::Dutch);
    }

    #[test]
    fn reads_postgres_variables() {
        let s = settings(&[
            ("PGHOST", "db.internal"),
            ("PGPORT", "6543"),
            ("PGDATABASE", "rag"),
            ("PGUSER", "rag_user"),
            ("PGPASSWORD", "secret"),
        ])
        .unwrap();
        assert_eq!(s.pghost, "db.internal");
        assert_eq!(s.pgport, 6543);
        assert_eq!(s.pgdatabase.as_deref(), Some("rag"));
        assert_eq!(s.pguser.as_deref(), Some("rag_user"));
        assert_eq!(s.pgpassword.as_deref(), Some("secret"));
        let opts = s.connect_options();
        assert_eq!(opts.get_host(), "db.internal");
        assert_eq!(opts.get_port(), 6543);
        assert_eq!(opts.get_database(), Some("rag"));
        assert_eq!(opts.get_username(), "rag_user");
    }

    #[test]
    fn ollama_provider_fills_key_and_models() {
        let s = settings(&[("AI_PROVIDER", "ollama")]).unwrap();
        assert_eq!(s.openai_api_key, "ollama");
        assert_eq!(s.ai_endpoint, "http://localhost:11434/v1");
        assert_eq!(s.ai_model, "gemma3:12b");
        assert_eq!(s.embedding_model, "nomic-embed-text");
        assert_eq!(s.embedding_dimensions, Some(768));
    }

    #[test]
    fn overrides_win_over_provider_defaults() {
        let s = settings(&[
            ("AI_PROVIDER", "gemini"),
            ("AI_ENDPOINT", "http://proxy:8080/v1"),
            ("AI_MODEL", "gemini-2.5-pro"),
            ("EMBEDDING_MODEL", "custom-embed"),
            ("TOP_K", "5"),
            ("DISTANCE_METRIC", "cosine"),
            ("PROMPT_TEMPLATE", "english"),
        ])
        .unwrap();
        assert_eq!(s.ai_endpoint, "http://proxy:8080/v1");
        assert_eq!(s.ai_model, "gemini-2.5-pro");
        assert_eq!(s.embedding_model, "custom-embed");
        assert_eq!(s.embedding_dimensions, None);
        assert_eq!(s.top_k, 5);
        assert_eq!(s.distance_metric, DistanceMetric::Cosine);
        assert_eq!(s.prompt_template, PromptTemplate::English);
    }

    #[test]
    fn explicit_dimensions_are_kept() {
        let s = settings(&[("EMBEDDING_DIMENSIONS", "512")]).unwrap();
        assert_eq!(s.embedding_dimensions, Some(512));
    }

    #[test]
    fn unknown_provider_is_rejected() {
        assert!(settings(&[("AI_PROVIDER", "anthropic")]).is_err());
    }

    #[test]
    fn metric_operators() {
        assert_eq!(DistanceMetric::L2.operator(), "<->");
        assert_eq!(DistanceMetric::Cosine.operator(), "<=>");
        assert_eq!(DistanceMetric::InnerProduct.operator(), "<#>");
    }
}
