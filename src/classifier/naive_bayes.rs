//! Bernoulli Naive Bayes model
//!
//! Learns per-label document frequencies of token presence from a labeled
//! training corpus, then classifies documents by comparing Laplace-smoothed
//! log-likelihood sums plus the label priors.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::tokenizer::tokenize_document;
use super::types::{Label, TrainingSummary};
use crate::error::{Result, SpamFilterError};

/// Naive Bayes spam classifier over token presence.
///
/// State is zero-initialized at construction and rebuilt from scratch by
/// every [`fit`](Self::fit) call. [`predict`](Self::predict) and
/// [`accuracy`](Self::accuracy) never mutate it, so a fitted classifier can
/// be shared freely between concurrent readers.
pub struct NaiveBayesClassifier {
    num_train_hams: usize,
    num_train_spams: usize,
    word_counts_ham: HashMap<String, u32>,
    word_counts_spam: HashMap<String, u32>,
}

impl NaiveBayesClassifier {
    /// Create an untrained classifier.
    pub fn new() -> Self {
        Self {
            num_train_hams: 0,
            num_train_spams: 0,
            word_counts_ham: HashMap::new(),
            word_counts_spam: HashMap::new(),
        }
    }

    /// Train on two labeled document lists, replacing any prior state.
    ///
    /// Each frequency-table entry counts the training documents of that
    /// label in which the token appeared at least once; repetition inside a
    /// single document does not add. Every document is read exactly once,
    /// and an unreadable document aborts the whole fit.
    pub fn fit(&mut self, train_hams: &[PathBuf], train_spams: &[PathBuf]) -> Result<()> {
        self.num_train_hams = train_hams.len();
        self.num_train_spams = train_spams.len();
        self.word_counts_ham = Self::presence_counts(train_hams)?;
        self.word_counts_spam = Self::presence_counts(train_spams)?;

        info!(
            "Fitted on {} ham / {} spam documents ({} / {} distinct tokens)",
            self.num_train_hams,
            self.num_train_spams,
            self.word_counts_ham.len(),
            self.word_counts_spam.len()
        );

        Ok(())
    }

    fn presence_counts(docs: &[PathBuf]) -> Result<HashMap<String, u32>> {
        let mut counts = HashMap::new();
        for doc in docs {
            for token in tokenize_document(doc)? {
                *counts.entry(token).or_insert(0) += 1;
            }
        }
        Ok(counts)
    }

    /// Predict the label of one document.
    ///
    /// Fails with [`SpamFilterError::NotTrained`] if the classifier has
    /// seen no training documents, and with the IO error kind if the
    /// document cannot be read.
    pub fn predict(&self, doc: &Path) -> Result<Label> {
        let tokens = tokenize_document(doc)?;
        self.classify(&tokens)
    }

    /// Score an already-tokenized document against both labels.
    fn classify(&self, tokens: &HashSet<String>) -> Result<Label> {
        let total = self.num_train_hams + self.num_train_spams;
        if total == 0 {
            return Err(SpamFilterError::NotTrained);
        }

        let mut ham_sum = (self.num_train_hams as f64 / total as f64).ln();
        let mut spam_sum = (self.num_train_spams as f64 / total as f64).ln();

        for token in tokens {
            ham_sum +=
                Self::smoothed_presence(&self.word_counts_ham, token, self.num_train_hams).ln();
            spam_sum +=
                Self::smoothed_presence(&self.word_counts_spam, token, self.num_train_spams).ln();
        }

        // Exact ties resolve to ham.
        if spam_sum > ham_sum {
            Ok(Label::Spam)
        } else {
            Ok(Label::Ham)
        }
    }

    /// Laplace-smoothed estimate of P(token present | label).
    ///
    /// Strictly inside (0, 1) for every token, including tokens never seen
    /// at training time for that label.
    fn smoothed_presence(counts: &HashMap<String, u32>, token: &str, num_docs: usize) -> f64 {
        let seen = counts.get(token).copied().unwrap_or(0) as f64;
        (seen + 1.0) / (num_docs as f64 + 2.0)
    }

    /// Fraction of correct predictions over a labeled evaluation set.
    ///
    /// The first list carries true label ham, the second spam. Fails with
    /// [`SpamFilterError::EmptyEvaluation`] when both lists are empty; any
    /// single prediction failure aborts the whole evaluation.
    pub fn accuracy(&self, hams: &[PathBuf], spams: &[PathBuf]) -> Result<f64> {
        let total = hams.len() + spams.len();
        if total == 0 {
            return Err(SpamFilterError::EmptyEvaluation);
        }

        let mut correct = 0usize;
        for doc in hams {
            if self.predict(doc)? == Label::Ham {
                correct += 1;
            }
        }
        for doc in spams {
            if self.predict(doc)? == Label::Spam {
                correct += 1;
            }
        }

        debug!("Scored {}/{} documents correct", correct, total);

        Ok(correct as f64 / total as f64)
    }

    /// Number of training documents of `label` containing `token`.
    pub fn document_frequency(&self, label: Label, token: &str) -> u32 {
        let counts = match label {
            Label::Ham => &self.word_counts_ham,
            Label::Spam => &self.word_counts_spam,
        };
        counts.get(token).copied().unwrap_or(0)
    }

    /// Training counts as (ham, spam).
    pub fn training_counts(&self) -> (usize, usize) {
        (self.num_train_hams, self.num_train_spams)
    }

    /// Summary of the current trained state.
    pub fn summary(&self) -> TrainingSummary {
        TrainingSummary {
            ham_documents: self.num_train_hams,
            spam_documents: self.num_train_spams,
            ham_vocabulary: self.word_counts_ham.len(),
            spam_vocabulary: self.word_counts_spam.len(),
        }
    }
}

impl Default for NaiveBayesClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthetic(
        num_hams: usize,
        num_spams: usize,
        ham_counts: &[(&str, u32)],
        spam_counts: &[(&str, u32)],
    ) -> NaiveBayesClassifier {
        NaiveBayesClassifier {
            num_train_hams: num_hams,
            num_train_spams: num_spams,
            word_counts_ham: ham_counts
                .iter()
                .map(|(t, c)| (t.to_string(), *c))
                .collect(),
            word_counts_spam: spam_counts
                .iter()
                .map(|(t, c)| (t.to_string(), *c))
                .collect(),
        }
    }

    fn tokens(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_untrained_classifier_rejects_classification() {
        let classifier = NaiveBayesClassifier::new();
        let result = classifier.classify(&tokens(&["anything"]));
        assert!(matches!(result, Err(SpamFilterError::NotTrained)));
    }

    #[test]
    fn test_tie_resolves_to_ham() {
        // Equal priors and a token unknown to both labels give exactly
        // equal scores for both labels.
        let classifier = synthetic(1, 1, &[("meeting", 1)], &[("free", 1)]);
        let label = classifier.classify(&tokens(&["unknown_word"])).unwrap();
        assert_eq!(label, Label::Ham);
    }

    #[test]
    fn test_spammy_tokens_predict_spam() {
        let classifier = synthetic(
            1,
            1,
            &[("meeting", 1), ("today", 1)],
            &[("free", 1), ("money", 1)],
        );
        let label = classifier.classify(&tokens(&["free", "money"])).unwrap();
        assert_eq!(label, Label::Spam);
    }

    #[test]
    fn test_hammy_tokens_predict_ham() {
        let classifier = synthetic(
            1,
            1,
            &[("meeting", 1), ("today", 1)],
            &[("free", 1), ("money", 1)],
        );
        let label = classifier
            .classify(&tokens(&["meeting", "today"]))
            .unwrap();
        assert_eq!(label, Label::Ham);
    }

    #[test]
    fn test_prior_breaks_unknown_token_asymmetrically() {
        // With more spam than ham training documents, an unknown token
        // document follows the prior. The smoothed likelihoods differ too
        // ((0+1)/(1+2) vs (0+1)/(3+2)), so check the actual decision.
        let classifier = synthetic(3, 1, &[("a", 2)], &[("b", 1)]);
        let label = classifier.classify(&tokens(&["unknown_word"])).unwrap();
        assert_eq!(label, Label::Ham);
    }

    #[test]
    fn test_smoothed_presence_is_strictly_between_zero_and_one() {
        let counts: HashMap<String, u32> = [("seen".to_string(), 4)].into_iter().collect();

        for (token, num_docs) in [("seen", 4), ("unseen", 4), ("seen", 0), ("unseen", 0)] {
            let p = NaiveBayesClassifier::smoothed_presence(&counts, token, num_docs);
            assert!(p > 0.0 && p < 1.0, "p = {} for {}/{}", p, token, num_docs);
        }
    }

    #[test]
    fn test_smoothed_presence_counts_unseen_as_zero() {
        let counts = HashMap::new();
        let p = NaiveBayesClassifier::smoothed_presence(&counts, "missing", 8);
        assert_eq!(p, 1.0 / 10.0);
    }

    #[test]
    fn test_accuracy_on_empty_input_is_an_error() {
        let classifier = synthetic(1, 1, &[], &[]);
        let result = classifier.accuracy(&[], &[]);
        assert!(matches!(result, Err(SpamFilterError::EmptyEvaluation)));
    }

    #[test]
    fn test_new_classifier_has_zero_state() {
        let classifier = NaiveBayesClassifier::new();
        assert_eq!(classifier.training_counts(), (0, 0));
        let summary = classifier.summary();
        assert_eq!(summary.ham_vocabulary, 0);
        assert_eq!(summary.spam_vocabulary, 0);
    }
}
