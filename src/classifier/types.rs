//! Classifier types and data structures

use serde::{Deserialize, Serialize};

/// Document label.
///
/// The decision rule in [`super::NaiveBayesClassifier::predict`] resolves
/// exact score ties to `Ham`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    /// Legitimate mail
    Ham,
    /// Unsolicited mail
    Spam,
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Ham => write!(f, "ham"),
            Label::Spam => write!(f, "spam"),
        }
    }
}

/// Summary of a completed training pass.
#[derive(Debug, Clone, Serialize)]
pub struct TrainingSummary {
    /// Ham documents seen during training
    pub ham_documents: usize,
    /// Spam documents seen during training
    pub spam_documents: usize,
    /// Distinct tokens in the ham frequency table
    pub ham_vocabulary: usize,
    /// Distinct tokens in the spam frequency table
    pub spam_vocabulary: usize,
}
