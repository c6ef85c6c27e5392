//! Document discovery and text extraction for the ingestion pipeline.
//!
//! Plain-text files are read directly; PDFs go through the external
//! `pdftotext` binary (poppler), which stands in for a real extraction
//! library. Both yield raw text that the chunker windows over.

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

const EXTENSIONS: [&str; 2] = ["pdf", "txt"];

/// List ingestible documents under `root`, sorted by path so ingestion is
/// deterministic across runs.
pub fn list_documents(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        if let Some(ext) = path.extension().and_then(|s| s.to_str()) {
            if EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()) {
                files.push(path.to_path_buf());
            }
        }
    }
    files.sort();
    files
}

/// Document identity is the file stem; it becomes `doc_id` in the metadata.
pub fn doc_id_for(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Extract raw text from one source document.
pub fn extract_text(path: &Path) -> Result<String> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase());
    let text = match ext.as_deref() {
        Some("pdf") => extract_pdf_text(path)?,
        _ => read_text_file(path)?,
    };
    tracing::debug!("extracted {} characters from {}", text.chars().count(), path.display());
    Ok(text)
}

fn read_text_file(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(_) => Ok(String::from_utf8_lossy(&fs::read(path)?).to_string()),
    }
}

fn extract_pdf_text(path: &Path) -> Result<String> {
    let output = Command::new("pdftotext")
        .arg("-layout")
        .arg("-enc")
        .arg("UTF-8")
        .arg(path)
        .arg("-")
        .output()
        .map_err(|e| {
            Error::Operation(format!(
                "failed to run pdftotext for {}: {} (is poppler installed?)",
                path.display(),
                e
            ))
        })?;
    if !output.status.success() {
        return Err(Error::Operation(format!(
            "pdftotext failed for {}: {}",
            path.display(),
            String::from_utf8_lossy(&output.stderr)
        )));
    }
    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}
