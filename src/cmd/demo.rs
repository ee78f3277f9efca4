use crate::{
    pkg::internal::{
        ai::AiClient,
        rag::{Rag, RagOptions},
        store::PgDocumentStore,
    },
    prelude::Result,
};

const SAMPLE_TEXTS: [&str; 3] = [
    "Wat is AI?",
    "De rol van PostgreSQL in dataverwerking.",
    "Hoe werkt een taalmodel?",
];

const SAMPLE_QUESTION: &str = "Wat doet PostgreSQL precies?";

pub async fn run(ai: &AiClient, store: &PgDocumentStore, options: RagOptions) -> Result<()> {
    let rag = Rag::new(ai, ai, store, options);
    let texts: Vec<String> = SAMPLE_TEXTS.iter().map(|t| t.to_string()).collect();
    rag.insert_documents(&texts).await?;

    let answer = rag.generate_answer(SAMPLE_QUESTION).await?;
    println!("Vraag: {}", SAMPLE_QUESTION);
    println!("Antwoord: {}", answer);
    Ok(())
}
