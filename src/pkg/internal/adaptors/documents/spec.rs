use pgvector::Vector;
use sqlx::FromRow;

use crate::prelude::{Error, Result};

#[derive(Debug, Clone, FromRow)]
pub struct DocumentEntry {
    pub id: i64,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct NewDocument {
    pub content: String,
    pub embedding: Vector,
}

impl NewDocument {
    /// Rejects empty embeddings, and embeddings whose length differs from
    /// `expected` when a width is known.
    pub fn check_width(&self, expected: Option<usize>) -> Result<()> {
        let actual = self.embedding.as_slice().len();
        if actual == 0 {
            return Err(Error::EmptyEmbedding(self.content.clone()));
        }
        match expected {
            Some(expected) if expected != actual => {
                Err(Error::DimensionMismatch { expected, actual })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(embedding: Vec<f32>) -> NewDocument {
        NewDocument {
            content: "Wat is AI?".into(),
            embedding: Vector::from(embedding),
        }
    }

    #[test]
    fn empty_embedding_is_rejected_even_without_width() {
        let err = doc(vec![]).check_width(None).unwrap_err();
        assert!(matches!(err, Error::EmptyEmbedding(ref text) if text == "Wat is AI?"));
    }

    #[test]
    fn matching_or_unknown_width_passes() {
        assert!(doc(vec![0.5; 4]).check_width(Some(4)).is_ok());
        assert!(doc(vec![0.5; 4]).check_width(None).is_ok());
    }

    #[test]
    fn ollama_width_against_default_column() {
        let err = doc(vec![0.1; 768]).check_width(Some(1536)).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                expected: 1536,
                actual: 768
            }
        ));
        assert!(err.to_string().starts_with("ERR-AI-006"));
    }
}
