use std::env;

use hrdesk_core::config::{self, Config};
use hrdesk_embed::default_embedder;
use hrdesk_retrieval::PolicyRetriever;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <query> [--limit N]", args[0]);
        eprintln!("Example: {} 'casual leave rules' --limit 5", args[0]);
        std::process::exit(1);
    }
    let query_text = &args[1];
    let mut limit = config::DEFAULT_TOP_K;
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--limit" => {
                if i + 1 < args.len() {
                    if let Ok(l) = args[i + 1].parse::<usize>() {
                        limit = l;
                        i += 1;
                    } else {
                        eprintln!("Error: --limit requires a number");
                        std::process::exit(1);
                    }
                } else {
                    eprintln!("Error: --limit requires a number");
                    std::process::exit(1);
                }
            }
            _ => {}
        }
        i += 1;
    }

    let config = Config::load()?;
    let index_path = config::expand_path(
        config.get_or("data.index_path", config::DEFAULT_INDEX_PATH.to_string()),
    );
    let metadata_path = config::expand_path(
        config.get_or("data.metadata_path", config::DEFAULT_METADATA_PATH.to_string()),
    );

    let embedder = default_embedder(&config)?;
    let retriever = PolicyRetriever::load(&index_path, &metadata_path, embedder)?;
    let results = retriever.search(query_text, limit)?;

    println!("Found {} results for: \"{}\"", results.len(), query_text);
    for (i, hit) in results.iter().enumerate() {
        println!(
            "\n  {}. score={:.4}  doc={}  chunk={}  path={}",
            i + 1,
            hit.score,
            hit.meta.doc_id,
            hit.meta.chunk_id,
            hit.meta.source_path
        );
        println!("     {}", hit.meta.text.trim());
    }
    Ok(())
}
