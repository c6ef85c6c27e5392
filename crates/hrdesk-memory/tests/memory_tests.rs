use std::collections::BTreeMap;
use tempfile::TempDir;

use hrdesk_core::traits::{HrDirectory, SnippetRetriever};
use hrdesk_core::types::{ChunkMeta, ScoredChunk};
use hrdesk_core::Result;
use hrdesk_memory::{format_as_prompt, DemoHrDirectory, MemoryStore, WorkingMemoryBuilder};

/// Fixed snippets standing in for the policy retriever; respects `top_k`.
struct FixedRetriever {
    hits: Vec<ScoredChunk>,
}

impl FixedRetriever {
    fn with_snippets(n: usize) -> Self {
        let hits = (0..n)
            .map(|i| ScoredChunk {
                meta: ChunkMeta {
                    doc_id: "leave_policy".to_string(),
                    chunk_id: i,
                    source_path: "data/policies/leave_policy.pdf".to_string(),
                    text: format!("Policy clause number {}.", i),
                },
                score: i as f32 * 0.25,
            })
            .collect();
        Self { hits }
    }
}

impl SnippetRetriever for FixedRetriever {
    fn search(&self, _query: &str, top_k: usize) -> Result<Vec<ScoredChunk>> {
        Ok(self.hits.iter().take(top_k).cloned().collect())
    }
}

#[test]
fn upsert_overwrites_and_leaves_other_keys() {
    let store = MemoryStore::open_in_memory().expect("open");
    store.set("U001", "preferred_tone", "concise").expect("set");

    let memory = store.get("U001").expect("get");
    assert_eq!(memory.get("preferred_tone").map(String::as_str), Some("concise"));
    assert_eq!(
        memory.get("preferred_language").map(String::as_str),
        Some("english"),
        "other keys untouched by the upsert"
    );
}

#[test]
fn unknown_user_has_empty_memory() {
    let store = MemoryStore::open_in_memory().expect("open");
    assert!(store.get("U999").expect("get").is_empty());
}

#[test]
fn defaults_are_seeded_at_open() {
    let store = MemoryStore::open_in_memory().expect("open");
    let memory = store.get("U002").expect("get");
    assert_eq!(memory.get("preferred_tone").map(String::as_str), Some("formal"));
}

#[test]
fn file_backed_store_creates_parent_dirs() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nested").join("memory.db");
    let store = MemoryStore::open(&path).expect("open");
    store.set("U001", "theme", "dark").expect("set");
    assert!(path.exists());

    // Reopen and read back through a fresh connection.
    drop(store);
    let store = MemoryStore::open(&path).expect("reopen");
    let memory = store.get("U001").expect("get");
    assert_eq!(memory.get("theme").map(String::as_str), Some("dark"));
}

#[test]
fn directory_knows_demo_users() {
    let directory = DemoHrDirectory::new();
    let leaves = directory.active_leaves("U001").expect("known user");
    let expected: BTreeMap<String, u32> = BTreeMap::from([
        ("casual".to_string(), 4),
        ("sick".to_string(), 6),
        ("earned".to_string(), 12),
    ]);
    assert_eq!(leaves, expected);

    let summary = directory.user_summary("U001").expect("summary");
    assert!(summary.contains("Rohit Sharma"));
    assert!(summary.contains("12 earned leaves"));

    let chain = directory.manager_chain("U002").expect("chain");
    assert_eq!(chain.manager, "Piyush Jain");

    let slip = directory.latest_payslip("U002").expect("payslip");
    assert_eq!(slip.month, "2025-10");
    assert_eq!(slip.components.get("basic").copied(), Some(45000));
}

#[test]
fn directory_returns_none_for_unknown_ids() {
    let directory = DemoHrDirectory::new();
    assert!(directory.user_summary("U999").is_none());
    assert!(directory.active_leaves("U999").is_none());
    assert!(directory.manager_chain("U999").is_none());
    assert!(directory.latest_payslip("U999").is_none());
}

#[test]
fn working_memory_for_known_user() {
    let store = MemoryStore::open_in_memory().expect("open");
    let directory = DemoHrDirectory::new();
    let retriever = FixedRetriever::with_snippets(5);
    let builder = WorkingMemoryBuilder::new(&store, &directory);

    let wm = builder
        .build("U001", "How many casual leaves do I have?", &retriever, 3)
        .expect("build");

    let leaves = wm.hr_data.active_leaves.as_ref().expect("leaves");
    assert_eq!(leaves.get("casual").copied(), Some(4));
    assert_eq!(leaves.get("sick").copied(), Some(6));
    assert_eq!(leaves.get("earned").copied(), Some(12));
    assert!(wm.policy_context.len() <= 3);
    assert_eq!(wm.user.memory.get("preferred_tone").map(String::as_str), Some("simple_friendly"));
    assert_eq!(wm.query, "How many casual leaves do I have?");
}

#[test]
fn working_memory_for_unknown_user_keeps_policy_context() {
    let store = MemoryStore::open_in_memory().expect("open");
    let directory = DemoHrDirectory::new();
    let retriever = FixedRetriever::with_snippets(4);
    let builder = WorkingMemoryBuilder::new(&store, &directory);

    let wm = builder
        .build("U999", "What is the leave policy?", &retriever, 3)
        .expect("build");

    assert!(wm.user.summary.is_none());
    assert!(wm.user.memory.is_empty());
    assert!(wm.hr_data.active_leaves.is_none());
    assert!(wm.hr_data.manager_chain.is_none());
    assert!(wm.hr_data.latest_payslip.is_none());
    assert!(!wm.policy_context.is_empty(), "retrieval is independent of identity");
}

#[test]
fn prompt_formatting_is_deterministic() {
    let store = MemoryStore::open_in_memory().expect("open");
    let directory = DemoHrDirectory::new();
    let retriever = FixedRetriever::with_snippets(2);
    let builder = WorkingMemoryBuilder::new(&store, &directory);

    let wm = builder
        .build("U001", "How many casual leaves do I have?", &retriever, 2)
        .expect("build");
    assert_eq!(format_as_prompt(&wm), format_as_prompt(&wm.clone()));
}

#[test]
fn prompt_carries_all_sections() {
    let store = MemoryStore::open_in_memory().expect("open");
    let directory = DemoHrDirectory::new();
    let retriever = FixedRetriever::with_snippets(1);
    let builder = WorkingMemoryBuilder::new(&store, &directory);

    let wm = builder
        .build("U001", "How many casual leaves do I have?", &retriever, 1)
        .expect("build");
    let prompt = format_as_prompt(&wm);

    assert!(prompt.contains("### USER SUMMARY"));
    assert!(prompt.contains("### USER MEMORY"));
    assert!(prompt.contains("### HR DATA"));
    assert!(prompt.contains("### POLICY CONTEXT (RAG SNIPPETS)"));
    assert!(prompt.contains("### USER QUESTION"));
    assert!(prompt.contains("Rohit Sharma"));
    assert!(prompt.contains("casual=4"));
    assert!(prompt.contains("[leave_policy - chunk 0] score=0.0000"));
    assert!(prompt.ends_with("How many casual leaves do I have?"));
}

#[test]
fn prompt_for_unknown_user_shows_gaps_not_errors() {
    let store = MemoryStore::open_in_memory().expect("open");
    let directory = DemoHrDirectory::new();
    let retriever = FixedRetriever::with_snippets(0);
    let builder = WorkingMemoryBuilder::new(&store, &directory);

    let wm = builder
        .build("U999", "Anything?", &retriever, 3)
        .expect("build");
    let prompt = format_as_prompt(&wm);

    assert!(prompt.contains("No summary available."));
    assert!(prompt.contains("- No stored preferences."));
    assert!(prompt.contains("Active leaves: not available"));
    assert!(prompt.contains("- No policy snippets found."));
}
