//! Overlapping fixed-size character windows over raw document text.

/// Split `text` into contiguous windows of at most `chunk_size` characters
/// (Unicode scalar values), advancing the start by `chunk_size - overlap`
/// each step. When `overlap >= chunk_size` the step falls back to the full
/// window so the scan always terminates. Windows that are empty after
/// trimming are dropped.
///
/// Pure and deterministic for given inputs.
pub fn chunk_text(text: &str, chunk_size: usize, overlap: usize) -> Vec<String> {
    if chunk_size == 0 {
        return Vec::new();
    }
    let chars: Vec<char> = text.chars().collect();
    let step = if overlap >= chunk_size {
        chunk_size
    } else {
        chunk_size - overlap
    };

    let mut chunks = Vec::new();
    let mut start = 0;
    while start < chars.len() {
        let end = (start + chunk_size).min(chars.len());
        let window: String = chars[start..end].iter().collect();
        let trimmed = window.trim();
        if !trimmed.is_empty() {
            chunks.push(trimmed.to_string());
        }
        if end == chars.len() {
            break;
        }
        start += step;
    }
    chunks
}
