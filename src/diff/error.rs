use thiserror::Error;

use crate::errors::DeckError;

/// Errors raised while comparing two assembled documents.
#[derive(Error, Debug)]
pub enum DiffError {
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Text diff generation failed: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("Document dump failed: {0}")]
    Deck(#[from] DeckError),

    #[error("Base document not set")]
    MissingBase,
}
