//! Embedding backend error types.

use thiserror::Error;

/// Errors from the encoder model and tokenizer.
#[derive(Debug, Clone, Error)]
pub enum EmbeddingError {
    /// Failed to load model weights or configuration
    #[error("Failed to load model: {0}")]
    ModelLoad(String),

    /// Failed to tokenize text
    #[error("Tokenization failed: {0}")]
    Tokenization(String),

    /// Forward pass through the model failed
    #[error("Inference failed: {0}")]
    Inference(String),
}
