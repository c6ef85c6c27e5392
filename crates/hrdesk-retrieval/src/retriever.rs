//! Load persisted artifacts and serve top-k similarity search.

use crate::flat::FlatIndex;
use hrdesk_core::error::{Error, Result};
use hrdesk_core::traits::{Embedder, SnippetRetriever};
use hrdesk_core::types::{ChunkMeta, ScoredChunk};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub struct PolicyRetriever {
    index: FlatIndex,
    metadata: Vec<ChunkMeta>,
    embedder: Box<dyn Embedder>,
}

impl PolicyRetriever {
    /// Reconstruct retrieval state from the two persisted artifacts. They
    /// are written together at ingest time and must agree on length.
    pub fn load(
        index_path: &Path,
        metadata_path: &Path,
        embedder: Box<dyn Embedder>,
    ) -> Result<Self> {
        if !metadata_path.exists() {
            return Err(Error::NotFound(format!(
                "metadata artifact missing: {}",
                metadata_path.display()
            )));
        }
        let index = FlatIndex::read_from(index_path)?;
        let metadata: Vec<ChunkMeta> =
            serde_json::from_reader(BufReader::new(File::open(metadata_path)?)).map_err(|e| {
                Error::Corruption(format!("{}: {}", metadata_path.display(), e))
            })?;
        if metadata.len() != index.len() {
            return Err(Error::Corruption(format!(
                "metadata length {} does not match index size {}; rebuild the index",
                metadata.len(),
                index.len()
            )));
        }
        tracing::info!(vectors = index.len(), dim = index.dim(), "loaded policy index");
        Ok(Self { index, metadata, embedder })
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Embed the query and return up to `top_k` metadata records ordered by
    /// increasing distance. Each result is a copy of the stored record with
    /// the raw distance attached; callers interpret the score.
    pub fn search(&self, query: &str, top_k: usize) -> Result<Vec<ScoredChunk>> {
        let mut vectors = self.embedder.embed_batch(&[query.to_string()])?;
        let query_vec = vectors
            .pop()
            .ok_or_else(|| Error::Operation("embedder returned no vector for the query".to_string()))?;
        let hits = self.index.search(&query_vec, top_k)?;
        Ok(hits
            .into_iter()
            .map(|(i, score)| ScoredChunk {
                meta: self.metadata[i].clone(),
                score,
            })
            .collect())
    }
}

impl SnippetRetriever for PolicyRetriever {
    fn search(&self, query: &str, top_k: usize) -> Result<Vec<ScoredChunk>> {
        PolicyRetriever::search(self, query, top_k)
    }
}
