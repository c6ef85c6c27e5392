use hrdesk_core::config::Config;
use hrdesk_core::traits::Embedder;
use hrdesk_core::Error;
use hrdesk_embed::{default_embedder, GeminiEmbedder, HashingEmbedder};

#[test]
fn hashing_embedder_reports_dim() {
    let embedder = HashingEmbedder::new(64);
    assert_eq!(embedder.dim(), 64);
    let vectors = embedder.embed_batch(&["hello world".to_string()]).expect("embed");
    assert_eq!(vectors.len(), 1);
    assert_eq!(vectors[0].len(), 64);
}

#[test]
fn hashing_embedder_is_deterministic() {
    let embedder = HashingEmbedder::new(128);
    let a = embedder.embed_batch(&["casual leave policy".to_string()]).expect("embed");
    let b = embedder.embed_batch(&["casual leave policy".to_string()]).expect("embed");
    assert_eq!(a, b);
}

#[test]
fn hashing_embedder_normalizes_output() {
    let embedder = HashingEmbedder::new(64);
    let vectors = embedder
        .embed_batch(&["employees accrue twelve earned leaves".to_string()])
        .expect("embed");
    let norm: f32 = vectors[0].iter().map(|x| x * x).sum::<f32>().sqrt();
    assert!((norm - 1.0).abs() < 1e-4, "expected unit norm, got {}", norm);
}

#[test]
fn hashing_embedder_preserves_batch_order() {
    let embedder = HashingEmbedder::new(64);
    let texts = vec!["first text".to_string(), "second text".to_string()];
    let batch = embedder.embed_batch(&texts).expect("embed");
    let first = embedder.embed_batch(&texts[..1]).expect("embed");
    let second = embedder.embed_batch(&texts[1..]).expect("embed");
    assert_eq!(batch[0], first[0]);
    assert_eq!(batch[1], second[0]);
}

#[test]
fn distinct_texts_embed_differently() {
    let embedder = HashingEmbedder::new(256);
    let vectors = embedder
        .embed_batch(&["sick leave".to_string(), "travel reimbursement".to_string()])
        .expect("embed");
    assert_ne!(vectors[0], vectors[1]);
}

#[test]
fn gemini_requires_api_key() {
    std::env::remove_var("GOOGLE_API_KEY");
    let err = GeminiEmbedder::from_env("text-embedding-004".to_string(), 768)
        .err()
        .expect("missing key must fail");
    assert!(matches!(err, Error::Configuration(_)), "got {:?}", err);
}

#[test]
fn gemini_constructor_keeps_model_name() {
    let embedder = GeminiEmbedder::new("key".to_string(), "text-embedding-004".to_string(), 768);
    assert_eq!(embedder.model(), "text-embedding-004");
    assert_eq!(embedder.dim(), 768);
}

#[test]
fn default_embedder_honors_fake_toggle() {
    std::env::set_var("APP_USE_FAKE_EMBEDDINGS", "1");
    let config = Config::load().expect("config");
    let embedder = default_embedder(&config).expect("embedder");
    assert_eq!(embedder.dim(), 768);
    let vectors = embedder.embed_batch(&["probe".to_string()]).expect("embed");
    assert_eq!(vectors[0].len(), 768);
}
