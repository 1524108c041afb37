//! Encoder model defaults and directory layout.

use std::path::PathBuf;

/// The documented default encoder. Applied in exactly one place (registry
/// construction) when no model directory is configured, never inferred
/// from absent options.
pub const DEFAULT_MODEL_ID: &str = "bert-base-uncased";

/// File names expected inside a model directory — the Hugging Face
/// export layout.
pub const CONFIG_FILE: &str = "config.json";
pub const TOKENIZER_FILE: &str = "tokenizer.json";
pub const WEIGHTS_FILE: &str = "model.safetensors";

/// Default on-disk location for [`DEFAULT_MODEL_ID`].
pub fn default_model_dir() -> PathBuf {
    PathBuf::from("models").join(DEFAULT_MODEL_ID)
}
