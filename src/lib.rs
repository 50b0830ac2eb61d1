//! spamfilter-rs: Bernoulli Naive Bayes spam filter
//!
//! A batch spam/ham classifier for tokenized email corpora: train once on
//! a labeled train split, then classify unseen documents and report
//! accuracy on a labeled test split.
//!
//! # Example
//!
//! ```no_run
//! use spamfilter_rs::classifier::NaiveBayesClassifier;
//! use spamfilter_rs::corpus::load_corpus;
//! use std::path::Path;
//!
//! fn main() -> spamfilter_rs::Result<()> {
//!     let corpus = load_corpus(Path::new("data"))?;
//!
//!     let mut classifier = NaiveBayesClassifier::new();
//!     classifier.fit(&corpus.train_hams, &corpus.train_spams)?;
//!
//!     let accuracy = classifier.accuracy(&corpus.test_hams, &corpus.test_spams)?;
//!     println!("Test accuracy: {accuracy:.4}");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling
//! - [`corpus`]: Corpus layout validation and document reading
//! - [`classifier`]: Tokenizer and Naive Bayes model

pub mod classifier;
pub mod config;
pub mod corpus;
pub mod error;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SpamFilterError};
