//! Corpus loading and document reading
//!
//! Locates the labeled train/test document lists on disk and reads
//! individual documents as raw text. The classifier itself never touches
//! the filesystem layout; it only consumes the lists produced here.

pub mod loader;
pub mod reader;

pub use loader::{load_corpus, CorpusSplit};
pub use reader::read_document;
