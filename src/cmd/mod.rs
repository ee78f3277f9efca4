use clap::{Parser, Subcommand};

use crate::{
    conf::Settings,
    pkg::internal::{ai::AiClient, store::PgDocumentStore},
    prelude::Result,
};

mod demo;
mod migrate;
mod query;

#[derive(Parser)]
#[command(about = "retrieval-augmented answers over a pgvector documents table")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    /// Load the sample texts and answer the sample question
    Demo,
    /// Create the vector extension and the documents table
    Migrate,
    /// Embed and store the given texts
    Ingest {
        #[arg(required = true)]
        texts: Vec<String>,
    },
    /// List the stored texts nearest to a question
    Search {
        question: String,
        #[arg(long)]
        top_k: Option<usize>,
    },
    /// Answer a question using the nearest stored texts as context
    Ask { question: String },
}

pub async fn run() -> Result<()> {
    let args = Cmd::parse();
    let settings = Settings::new()?;
    let store = PgDocumentStore::new(settings.connect_options(), settings.distance_metric);
    match args.command.unwrap_or(SubCommandType::Demo) {
        SubCommandType::Demo => {
            let ai = AiClient::new(&settings)?;
            demo::run(&ai, &store, settings.rag_options()).await?;
        }
        SubCommandType::Migrate => {
            migrate::apply(&store).await?;
        }
        SubCommandType::Ingest { texts } => {
            let ai = AiClient::new(&settings)?;
            query::ingest(&ai, &store, settings.rag_options(), &texts).await?;
        }
        SubCommandType::Search { question, top_k } => {
            let ai = AiClient::new(&settings)?;
            let top_k = top_k.unwrap_or(settings.top_k);
            query::search(&ai, &store, settings.rag_options(), &question, top_k).await?;
        }
        SubCommandType::Ask { question } => {
            let ai = AiClient::new(&settings)?;
            query::ask(&ai, &store, settings.rag_options(), &question).await?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_demo() {
        let args = Cmd::try_parse_from(["pgvector-rag"]).unwrap();
        assert!(args.command.is_none());
    }

    #[test]
    fn search_accepts_top_k() {
        let args = Cmd::try_parse_from(["pgvector-rag", "search", "Wat is AI?", "--top-k", "5"])
            .unwrap();
        match args.command {
            Some(SubCommandType::Search { question, top_k }) => {
                assert_eq!(question, "Wat is AI?");
                assert_eq!(top_k, Some(5));
            }
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn ingest_requires_texts() {
        assert!(Cmd::try_parse_from(["pgvector-rag", "ingest"]).is_err());
    }

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        Cmd::command().debug_assert();
    }
}
