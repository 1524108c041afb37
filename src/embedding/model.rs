//! BERT encoder backed by candle.

use std::fs;
use std::path::Path;

use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config};
use tokenizers::{Tokenizer, TruncationParams};

use super::config::{CONFIG_FILE, TOKENIZER_FILE, WEIGHTS_FILE};
use super::error::EmbeddingError;
use super::Embedder;

/// The two `config.json` fields read directly; the full configuration
/// is deserialized separately by the model loader.
#[derive(serde::Deserialize)]
struct EncoderDims {
    hidden_size: usize,
    max_position_embeddings: usize,
}

/// A BERT-family encoder loaded from a local model directory
/// (`config.json`, `tokenizer.json`, `model.safetensors`).
pub struct BertEncoder {
    model: BertModel,
    tokenizer: Tokenizer,
    device: Device,
    hidden_size: usize,
}

impl BertEncoder {
    /// Load model weights, configuration, and tokenizer from `dir`.
    ///
    /// Runs on CPU. The tokenizer truncates to the model's maximum
    /// position embeddings.
    pub fn from_dir(dir: &Path) -> Result<Self, EmbeddingError> {
        let config_text = fs::read_to_string(dir.join(CONFIG_FILE))
            .map_err(|e| EmbeddingError::ModelLoad(format!("{}: {e}", dir.display())))?;
        let config: Config = serde_json::from_str(&config_text)
            .map_err(|e| EmbeddingError::ModelLoad(format!("invalid {CONFIG_FILE}: {e}")))?;
        let dims: EncoderDims = serde_json::from_str(&config_text)
            .map_err(|e| EmbeddingError::ModelLoad(format!("invalid {CONFIG_FILE}: {e}")))?;

        let mut tokenizer = Tokenizer::from_file(dir.join(TOKENIZER_FILE))
            .map_err(|e| EmbeddingError::ModelLoad(format!("invalid {TOKENIZER_FILE}: {e}")))?;
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length: dims.max_position_embeddings,
                ..Default::default()
            }))
            .map_err(|e| EmbeddingError::ModelLoad(format!("tokenizer truncation: {e}")))?;

        let device = Device::Cpu;
        let weights = fs::read(dir.join(WEIGHTS_FILE))
            .map_err(|e| EmbeddingError::ModelLoad(format!("{}: {e}", dir.display())))?;
        let vb = VarBuilder::from_buffered_safetensors(weights, DType::F32, &device)
            .map_err(|e| EmbeddingError::ModelLoad(e.to_string()))?;

        let model =
            BertModel::load(vb, &config).map_err(|e| EmbeddingError::ModelLoad(e.to_string()))?;

        Ok(Self {
            model,
            tokenizer,
            device,
            hidden_size: dims.hidden_size,
        })
    }
}

impl Embedder for BertEncoder {
    fn tokenize(&self, text: &str) -> Result<Vec<u32>, EmbeddingError> {
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| EmbeddingError::Tokenization(e.to_string()))?;
        Ok(encoding.get_ids().to_vec())
    }

    fn embed_tokens(&self, token_ids: &[u32]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if token_ids.is_empty() {
            return Ok(Vec::new());
        }

        let input_ids = Tensor::new(token_ids, &self.device)
            .and_then(|t| t.unsqueeze(0))
            .map_err(|e| EmbeddingError::Inference(e.to_string()))?;
        let token_type_ids = input_ids
            .zeros_like()
            .map_err(|e| EmbeddingError::Inference(e.to_string()))?;

        let hidden = self
            .model
            .forward(&input_ids, &token_type_ids, None)
            .map_err(|e| EmbeddingError::Inference(e.to_string()))?;

        hidden
            .squeeze(0)
            .and_then(|t| t.to_vec2::<f32>())
            .map_err(|e| EmbeddingError::Inference(e.to_string()))
    }

    fn hidden_size(&self) -> usize {
        self.hidden_size
    }
}
