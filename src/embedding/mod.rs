//! Token-level text encoding for the embedding-family metrics.
//!
//! [`Embedder`] is the seam between metric adapters and the model
//! backend: adapters see token IDs and per-token vectors, nothing else.
//! The production implementation is [`BertEncoder`], which loads a
//! BERT-family model from a local directory via candle; tests substitute
//! deterministic stubs.

mod config;
mod error;
mod model;

pub use config::{default_model_dir, CONFIG_FILE, DEFAULT_MODEL_ID, TOKENIZER_FILE, WEIGHTS_FILE};
pub use error::EmbeddingError;
pub use model::BertEncoder;

/// Tokenization plus per-token encoding.
///
/// Implementations must be `Send + Sync`; the metric adapters share one
/// instance behind an `Arc` and call it strictly sequentially.
pub trait Embedder: Send + Sync {
    /// Tokenize text into model token IDs.
    fn tokenize(&self, text: &str) -> Result<Vec<u32>, EmbeddingError>;

    /// Encode token IDs into one hidden-state vector per token.
    fn embed_tokens(&self, token_ids: &[u32]) -> Result<Vec<Vec<f32>>, EmbeddingError>;

    /// Dimension of each returned vector.
    fn hidden_size(&self) -> usize;

    /// Tokenize and encode in one step.
    fn encode(&self, text: &str) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let token_ids = self.tokenize(text)?;
        self.embed_tokens(&token_ids)
    }
}
