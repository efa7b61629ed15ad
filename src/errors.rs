use thiserror::Error;

/// Represents errors that can occur while loading a presentation or assembling a deck.
///
/// The layout engine itself never fails; these errors only surface at the edges
/// (input decoding, configuration, serialisation of the output document).
#[derive(Error, Debug)]
pub enum DeckError {
    /// Error occurred during the deserialization of a presentation or configuration JSON.
    #[error("Failed to deserialize JSON: {0}")]
    JsonDeserialization(#[from] serde_json::Error),

    /// An I/O error occurred, typically while reading an input or configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Formatting error while writing a textual dump of a document.
    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),

    /// An error related to reading environment variables.
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Missing or unusable data required for assembling the deck (e.g. an empty canvas).
    #[error("Missing expected data necessary for conversion: {0}")]
    MissingData(String),

    /// An error indicating invalid input was provided to a public function.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// A type alias for `Result<T, DeckError>` for convenience within the crate.
pub type Result<T> = std::result::Result<T, DeckError>;
