use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpamFilterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corpus layout error: {0}")]
    CorpusLayout(String),

    #[error("Classifier has no training data")]
    NotTrained,

    #[error("Evaluation set is empty")]
    EmptyEvaluation,

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SpamFilterError>;
