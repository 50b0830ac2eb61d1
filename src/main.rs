use spamfilter_rs::classifier::NaiveBayesClassifier;
use spamfilter_rs::config::Config;
use spamfilter_rs::corpus::load_corpus;
use std::path::Path;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .pretty()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("Starting spamfilter-rs");

    // Load configuration
    let config = if Path::new("config.toml").exists() {
        Config::from_file("config.toml")?
    } else {
        info!("No config file found, using defaults");
        Config::default()
    };

    info!("Configuration loaded");
    info!("  Corpus root: {}", config.corpus.data_dir);

    let corpus = load_corpus(Path::new(&config.corpus.data_dir))?;

    let mut classifier = NaiveBayesClassifier::new();
    classifier.fit(&corpus.train_hams, &corpus.train_spams)?;

    info!(
        "Training summary: {}",
        serde_json::to_string(&classifier.summary())?
    );

    let train_accuracy = classifier.accuracy(&corpus.train_hams, &corpus.train_spams)?;
    let test_accuracy = classifier.accuracy(&corpus.test_hams, &corpus.test_spams)?;

    info!("Train accuracy: {:.4}", train_accuracy);
    info!("Test accuracy:  {:.4}", test_accuracy);

    Ok(())
}
