use std::env;
use std::path::PathBuf;

use hrdesk_core::config::{self, Config};
use hrdesk_embed::default_embedder;
use hrdesk_memory::{format_as_prompt, DemoHrDirectory, MemoryStore, WorkingMemoryBuilder};
use hrdesk_retrieval::{IngestPipeline, PolicyRetriever};

/// Placeholder for the downstream model call; the demo stops at the prompt.
fn call_llm(_prompt: &str) -> String {
    "This is a placeholder answer. In a real deployment the assembled prompt would be sent to an LLM API."
        .to_string()
}

fn parse_args() -> (String, Vec<String>) {
    let mut args: Vec<String> = env::args().collect();
    let prog = args.remove(0);
    if args.is_empty() {
        eprintln!("Usage: {} <ingest|ask> [args...]", prog);
        std::process::exit(1);
    }
    let cmd = args.remove(0);
    (cmd, args)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let config = Config::load().map_err(|e| {
        eprintln!("Error loading config: {}", e);
        e
    })?;
    let (cmd, args) = parse_args();
    match cmd.as_str() {
        "ingest" => run_ingest(&config, &args),
        "ask" => run_ask(&config, &args),
        _ => {
            eprintln!("Unknown command: {}", cmd);
            eprintln!("Usage: hrdesk <ingest|ask> [args...]");
            std::process::exit(1);
        }
    }
}

fn run_ingest(config: &Config, args: &[String]) -> anyhow::Result<()> {
    let docs_dir = args.first().map(PathBuf::from).unwrap_or_else(|| {
        config::expand_path(
            config.get_or("data.policies_dir", config::DEFAULT_POLICIES_DIR.to_string()),
        )
    });
    let index_path = config::expand_path(
        config.get_or("data.index_path", config::DEFAULT_INDEX_PATH.to_string()),
    );
    let metadata_path = config::expand_path(
        config.get_or("data.metadata_path", config::DEFAULT_METADATA_PATH.to_string()),
    );
    let chunk_size = config.get_or("retrieval.chunk_size", config::DEFAULT_CHUNK_SIZE);
    let overlap = config.get_or("retrieval.chunk_overlap", config::DEFAULT_CHUNK_OVERLAP);

    println!("Ingesting policy documents from {}", docs_dir.display());
    let embedder = default_embedder(config)?;
    let pipeline = IngestPipeline::new(embedder.as_ref(), chunk_size, overlap);
    let report = pipeline.run(&docs_dir, &index_path, &metadata_path)?;

    println!(
        "Built index with {} chunks across {} documents.",
        report.chunks, report.documents
    );
    println!("Index saved to {}", report.index_path.display());
    println!("Metadata saved to {}", report.metadata_path.display());
    Ok(())
}

fn run_ask(config: &Config, args: &[String]) -> anyhow::Result<()> {
    let mut user_id = None;
    let mut question = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--user_id" | "-u" => {
                if i + 1 < args.len() {
                    user_id = Some(args[i + 1].clone());
                    i += 1;
                } else {
                    eprintln!("Error: --user_id requires a value");
                    std::process::exit(1);
                }
            }
            "--question" | "-q" => {
                if i + 1 < args.len() {
                    question = Some(args[i + 1].clone());
                    i += 1;
                } else {
                    eprintln!("Error: --question requires a value");
                    std::process::exit(1);
                }
            }
            _ => {}
        }
        i += 1;
    }
    let (user_id, question) = match (user_id, question) {
        (Some(u), Some(q)) => (u, q),
        _ => {
            eprintln!("Usage: hrdesk ask --user_id U001 --question \"How many casual leaves do I have?\"");
            std::process::exit(1);
        }
    };

    let index_path = config::expand_path(
        config.get_or("data.index_path", config::DEFAULT_INDEX_PATH.to_string()),
    );
    let metadata_path = config::expand_path(
        config.get_or("data.metadata_path", config::DEFAULT_METADATA_PATH.to_string()),
    );
    let db_path = config::expand_path(
        config.get_or("data.memory_db_path", config::DEFAULT_MEMORY_DB_PATH.to_string()),
    );
    let top_k = config.get_or("retrieval.top_k", config::DEFAULT_TOP_K);

    let embedder = default_embedder(config)?;
    let retriever = PolicyRetriever::load(&index_path, &metadata_path, embedder)?;
    let store = MemoryStore::open(&db_path)?;
    let directory = DemoHrDirectory::new();
    let builder = WorkingMemoryBuilder::new(&store, &directory);

    let working_memory = builder.build(&user_id, &question, &retriever, top_k)?;
    let prompt = format_as_prompt(&working_memory);

    println!("========== ASSEMBLED PROMPT ==========");
    println!("{}", prompt);
    println!("\n========== FINAL ANSWER ==========");
    println!("{}", call_llm(&prompt));
    Ok(())
}
