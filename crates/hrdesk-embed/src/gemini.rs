//! Remote embedding client for the Google Generative Language API.

use hrdesk_core::error::{Error, Result};
use hrdesk_core::traits::Embedder;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GeminiEmbedder {
    client: reqwest::blocking::Client,
    api_key: String,
    model: String,
    dim: usize,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    content: Content<'a>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct EmbedResponse {
    embedding: ContentEmbedding,
}

#[derive(Deserialize)]
struct ContentEmbedding {
    values: Vec<f32>,
}

impl GeminiEmbedder {
    pub fn new(api_key: String, model: String, dim: usize) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();
        Self { client, api_key, model, dim }
    }

    /// Build the client from `GOOGLE_API_KEY`. Absence of the key is a
    /// fatal configuration error, surfaced at construction rather than on
    /// the first request.
    pub fn from_env(model: String, dim: usize) -> Result<Self> {
        let api_key = std::env::var("GOOGLE_API_KEY").map_err(|_| {
            Error::Configuration(
                "GOOGLE_API_KEY environment variable is required for embedding generation"
                    .to_string(),
            )
        })?;
        Ok(Self::new(api_key, model, dim))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn embed_one(&self, text: &str) -> Result<Vec<f32>> {
        let url = format!(
            "{}/models/{}:embedContent?key={}",
            API_BASE, self.model, self.api_key
        );
        let body = EmbedRequest {
            content: Content { parts: vec![Part { text }] },
        };
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .map_err(|e| Error::Operation(format!("embedding request failed: {}", e)))?;
        if !response.status().is_success() {
            return Err(Error::Operation(format!(
                "embedding request for model {} returned {}",
                self.model,
                response.status()
            )));
        }
        let parsed: EmbedResponse = response
            .json()
            .map_err(|e| Error::Operation(format!("malformed embedding response: {}", e)))?;
        tracing::debug!(chars = text.chars().count(), "embedded one text");
        Ok(parsed.embedding.values)
    }
}

impl Embedder for GeminiEmbedder {
    fn dim(&self) -> usize {
        self.dim
    }

    // The embedContent endpoint takes one text per call.
    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.embed_one(t)).collect()
    }
}
