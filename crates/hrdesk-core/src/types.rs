//! Domain types shared by the retrieval engine and the assembler.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Descriptive record attached to each indexed vector.
///
/// The metadata array persisted next to the index is positionally aligned
/// with it: `metadata[i]` describes the i-th inserted vector. That alignment
/// is the load-bearing contract of the artifacts and is checked when the
/// retriever reconstructs its state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkMeta {
    pub doc_id: String,
    pub chunk_id: usize,
    pub source_path: String,
    pub text: String,
}

/// A metadata record returned from search, annotated with the raw squared
/// L2 distance to the query vector. Lower score means more similar; no
/// normalization or thresholding is applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredChunk {
    #[serde(flatten)]
    pub meta: ChunkMeta,
    pub score: f32,
}

/// Reporting line from the HR directory: who the user reports to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerChain {
    pub manager: String,
    pub manager_email: String,
    pub org_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payslip {
    pub month: String,
    pub components: BTreeMap<String, i64>,
}

/// Identity slice of the working memory: who is asking, plus their stored
/// preferences. `memory` is empty for users with no rows in the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserContext {
    pub user_id: String,
    pub summary: Option<String>,
    pub memory: BTreeMap<String, String>,
}

/// HR facts for one user. Each field is independently optional; an unknown
/// user id yields `None` across the board rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HrData {
    pub active_leaves: Option<BTreeMap<String, u32>>,
    pub manager_chain: Option<ManagerChain>,
    pub latest_payslip: Option<Payslip>,
}

/// Request-scoped aggregate handed to the prompt formatter. Built fresh per
/// request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkingMemory {
    pub user: UserContext,
    pub query: String,
    pub hr_data: HrData,
    pub policy_context: Vec<ScoredChunk>,
}
