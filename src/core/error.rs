//! Error type for the boundary layer.
//!
//! Classification, aggregation and rendering never fail. Errors only come
//! from decoding source payloads or stored documents, loading configuration,
//! or handing the finished document to a sink.

use thiserror::Error;

/// Errors raised at the edges of the pipeline.
#[derive(Error, Debug)]
pub enum DecklistError {
    #[error("Invalid deck payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Invalid deck document: {0}")]
    Document(String),

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Sink rejected {file_name}: {reason}")]
    Sink { file_name: String, reason: String },
}

/// Result alias for boundary operations.
pub type Result<T> = std::result::Result<T, DecklistError>;
