//! hrdesk-retrieval
//!
//! The policy retrieval engine: a flat exact nearest-neighbor index over
//! squared L2 distance, the one-shot batch ingestion pipeline that fills it
//! from a documents directory, and the retriever that serves top-k search
//! over the persisted artifacts.

pub mod flat;
pub mod ingest;
pub mod retriever;

pub use flat::FlatIndex;
pub use ingest::{IngestPipeline, IngestReport};
pub use retriever::PolicyRetriever;
