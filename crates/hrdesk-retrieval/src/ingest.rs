//! One-shot batch ingestion: documents -> chunks -> vectors -> artifacts.

use crate::flat::FlatIndex;
use hrdesk_core::chunker::chunk_text;
use hrdesk_core::documents::{doc_id_for, extract_text, list_documents};
use hrdesk_core::error::{Error, Result};
use hrdesk_core::traits::Embedder;
use hrdesk_core::types::ChunkMeta;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

pub struct IngestReport {
    pub documents: usize,
    pub chunks: usize,
    pub index_path: PathBuf,
    pub metadata_path: PathBuf,
}

pub struct IngestPipeline<'a> {
    embedder: &'a dyn Embedder,
    chunk_size: usize,
    overlap: usize,
}

impl<'a> IngestPipeline<'a> {
    pub fn new(embedder: &'a dyn Embedder, chunk_size: usize, overlap: usize) -> Self {
        Self { embedder, chunk_size, overlap }
    }

    /// Walk `docs_dir` in sorted order, chunk and embed every document, and
    /// persist the index blob and metadata array together. The two
    /// artifacts are positionally aligned: metadata[i] describes the i-th
    /// vector inserted into the index.
    pub fn run(
        &self,
        docs_dir: &Path,
        index_path: &Path,
        metadata_path: &Path,
    ) -> Result<IngestReport> {
        let files = list_documents(docs_dir);
        if files.is_empty() {
            return Err(Error::NoInput(format!(
                "no policy documents under {}; add .txt or .pdf files before ingestion",
                docs_dir.display()
            )));
        }

        let mut index: Option<FlatIndex> = None;
        let mut metadata: Vec<ChunkMeta> = Vec::new();

        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} documents {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        for path in &files {
            pb.set_message(doc_id_for(path));
            let raw_text = extract_text(path)?;
            let chunks = chunk_text(&raw_text, self.chunk_size, self.overlap);
            if chunks.is_empty() {
                tracing::warn!("no usable text in {}", path.display());
                pb.inc(1);
                continue;
            }
            let doc_id = doc_id_for(path);
            let vectors = self.embedder.embed_batch(&chunks)?;
            for (chunk_id, (text, vector)) in chunks.into_iter().zip(vectors).enumerate() {
                let index = index.get_or_insert_with(|| FlatIndex::new(vector.len()));
                index.add(&vector)?;
                metadata.push(ChunkMeta {
                    doc_id: doc_id.clone(),
                    chunk_id,
                    source_path: path.display().to_string(),
                    text,
                });
            }
            pb.inc(1);
        }
        pb.finish_and_clear();

        let index = index.ok_or_else(|| {
            Error::NoContent(
                "chunking and embedding produced no vectors; check that the documents contain extractable text"
                    .to_string(),
            )
        })?;

        if let Some(parent) = index_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        if let Some(parent) = metadata_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        index.write_to(index_path)?;
        serde_json::to_writer_pretty(BufWriter::new(File::create(metadata_path)?), &metadata)?;

        tracing::info!(
            documents = files.len(),
            chunks = metadata.len(),
            "ingestion complete"
        );
        Ok(IngestReport {
            documents: files.len(),
            chunks: metadata.len(),
            index_path: index_path.to_path_buf(),
            metadata_path: metadata_path.to_path_buf(),
        })
    }
}
