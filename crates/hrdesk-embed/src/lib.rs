//! Embedder implementations behind the `hrdesk_core::traits::Embedder` seam.
//!
//! Two backends: a remote Gemini `embedContent` client for real runs and a
//! deterministic hashing embedder for tests and offline indexing. Set
//! `APP_USE_FAKE_EMBEDDINGS=1` to force the hashing backend.

pub mod gemini;
pub mod hashing;

pub use gemini::GeminiEmbedder;
pub use hashing::HashingEmbedder;

use hrdesk_core::config::{Config, DEFAULT_EMBEDDING_DIM, DEFAULT_EMBEDDING_MODEL};
use hrdesk_core::traits::Embedder;
use hrdesk_core::Result;

/// Pick the embedder for this process.
///
/// `APP_USE_FAKE_EMBEDDINGS=1` selects the hashing embedder; otherwise the
/// Gemini client is built from `GOOGLE_API_KEY` and fails fast with a
/// configuration error when the key is absent.
pub fn default_embedder(config: &Config) -> Result<Box<dyn Embedder>> {
    let dim = config.get_or("embedding.dim", DEFAULT_EMBEDDING_DIM);
    let use_fake = std::env::var("APP_USE_FAKE_EMBEDDINGS")
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    if use_fake {
        tracing::info!(dim, "using deterministic hashing embedder");
        return Ok(Box::new(HashingEmbedder::new(dim)));
    }
    let model: String = config.get_or("embedding.model", DEFAULT_EMBEDDING_MODEL.to_string());
    let embedder = GeminiEmbedder::from_env(model, dim)?;
    Ok(Box::new(embedder))
}
