//! Spam classification
//!
//! A Bernoulli-style Naive Bayes model over token presence: the tokenizer
//! reduces a document to its set of distinct tokens, and the classifier
//! turns per-label document-frequency tables into a smoothed log-likelihood
//! decision between ham and spam.

pub mod naive_bayes;
pub mod tokenizer;
pub mod types;

pub use naive_bayes::NaiveBayesClassifier;
pub use types::{Label, TrainingSummary};
