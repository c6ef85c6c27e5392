//! Assemble and render the per-request working memory.

use crate::store::MemoryStore;
use hrdesk_core::error::Result;
use hrdesk_core::traits::{HrDirectory, SnippetRetriever};
use hrdesk_core::types::{HrData, UserContext, WorkingMemory};
use std::fmt::Write as _;

pub struct WorkingMemoryBuilder<'a> {
    store: &'a MemoryStore,
    directory: &'a dyn HrDirectory,
}

impl<'a> WorkingMemoryBuilder<'a> {
    pub fn new(store: &'a MemoryStore, directory: &'a dyn HrDirectory) -> Self {
        Self { store, directory }
    }

    /// Compose user identity, stored preferences, HR facts and retrieved
    /// policy snippets into one request-scoped record.
    ///
    /// Unknown user ids degrade to empty/absent fields; retrieval runs
    /// regardless of identity, so the prompt still carries policy context.
    pub fn build(
        &self,
        user_id: &str,
        query: &str,
        retriever: &dyn SnippetRetriever,
        top_k: usize,
    ) -> Result<WorkingMemory> {
        let memory = self.store.get(user_id)?;
        let summary = self.directory.user_summary(user_id);
        let active_leaves = self.directory.active_leaves(user_id);
        let manager_chain = self.directory.manager_chain(user_id);
        let latest_payslip = self.directory.latest_payslip(user_id);
        let policy_context = retriever.search(query, top_k)?;

        tracing::debug!(
            user_id,
            snippets = policy_context.len(),
            known_user = summary.is_some(),
            "assembled working memory"
        );
        Ok(WorkingMemory {
            user: UserContext {
                user_id: user_id.to_string(),
                summary,
                memory,
            },
            query: query.to_string(),
            hr_data: HrData {
                active_leaves,
                manager_chain,
                latest_payslip,
            },
            policy_context,
        })
    }
}

/// Render the working memory as the prompt handed to the LLM.
///
/// Purely presentational and deterministic for a given record: fixed section
/// headers, BTreeMap iteration order, plain interpolation with no escaping.
pub fn format_as_prompt(wm: &WorkingMemory) -> String {
    let mut out = String::new();

    out.push_str("### USER SUMMARY\n");
    out.push_str(wm.user.summary.as_deref().unwrap_or("No summary available."));
    out.push('\n');

    out.push_str("\n### USER MEMORY\n");
    if wm.user.memory.is_empty() {
        out.push_str("- No stored preferences.\n");
    } else {
        for (key, value) in &wm.user.memory {
            let _ = writeln!(out, "- {}: {}", key, value);
        }
    }

    out.push_str("\n### HR DATA\n");
    match &wm.hr_data.active_leaves {
        Some(leaves) => {
            let parts: Vec<String> = leaves.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
            let _ = writeln!(out, "Active leaves: {}", parts.join(", "));
        }
        None => out.push_str("Active leaves: not available\n"),
    }
    match &wm.hr_data.manager_chain {
        Some(chain) => {
            let _ = writeln!(
                out,
                "Manager chain: {} <{}> ({})",
                chain.manager, chain.manager_email, chain.org_path
            );
        }
        None => out.push_str("Manager chain: not available\n"),
    }
    match &wm.hr_data.latest_payslip {
        Some(slip) => {
            let parts: Vec<String> = slip
                .components
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            let _ = writeln!(out, "Latest payslip ({}): {}", slip.month, parts.join(", "));
        }
        None => out.push_str("Latest payslip: not available\n"),
    }

    out.push_str("\n### POLICY CONTEXT (RAG SNIPPETS)\n");
    if wm.policy_context.is_empty() {
        out.push_str("- No policy snippets found.\n");
    } else {
        for hit in &wm.policy_context {
            let _ = writeln!(
                out,
                "- [{} - chunk {}] score={:.4}",
                hit.meta.doc_id, hit.meta.chunk_id, hit.score
            );
            let _ = writeln!(out, "{}\n", hit.meta.text.trim());
        }
    }

    out.push_str("\n### USER QUESTION\n");
    out.push_str(&wm.query);
    out
}
