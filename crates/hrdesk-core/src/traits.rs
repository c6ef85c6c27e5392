use crate::types::{ManagerChain, Payslip, ScoredChunk};
use std::collections::BTreeMap;

/// Text to fixed-dimension vectors, order preserving. The dimension must
/// match between index-build time and query time; the flat index raises
/// `Error::DimensionMismatch` when they differ.
pub trait Embedder: Send + Sync {
    fn dim(&self) -> usize;
    fn embed_batch(&self, texts: &[String]) -> crate::Result<Vec<Vec<f32>>>;
}

/// Top-k similarity search over indexed policy snippets.
pub trait SnippetRetriever: Send + Sync {
    fn search(&self, query: &str, top_k: usize) -> crate::Result<Vec<ScoredChunk>>;
}

/// Read-only lookups against an HR backend. Every method returns `None` for
/// unknown user ids so a real backend can substitute the demo directory
/// without touching the assembler.
pub trait HrDirectory: Send + Sync {
    fn user_summary(&self, user_id: &str) -> Option<String>;
    fn active_leaves(&self, user_id: &str) -> Option<BTreeMap<String, u32>>;
    fn manager_chain(&self, user_id: &str) -> Option<ManagerChain>;
    fn latest_payslip(&self, user_id: &str) -> Option<Payslip>;
}
