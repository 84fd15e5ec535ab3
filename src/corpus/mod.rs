pub mod loader;
pub mod segment;
pub mod types;

pub use loader::{LoadError, load_corpus};
pub use segment::segment_sentences;
pub use types::Corpus;
