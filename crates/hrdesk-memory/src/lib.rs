//! hrdesk-memory
//!
//! The non-retrieval half of the assistant: the SQLite preference store,
//! the hardcoded demo HR directory, and the working-memory assembler that
//! merges both with retrieved policy snippets into one prompt.

pub mod directory;
pub mod store;
pub mod working_memory;

pub use directory::DemoHrDirectory;
pub use store::MemoryStore;
pub use working_memory::{format_as_prompt, WorkingMemoryBuilder};
