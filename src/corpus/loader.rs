use crate::error::{Result, SpamFilterError};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// The four document lists of a labeled train/test corpus.
#[derive(Debug, Clone, Default)]
pub struct CorpusSplit {
    pub train_hams: Vec<PathBuf>,
    pub train_spams: Vec<PathBuf>,
    pub test_hams: Vec<PathBuf>,
    pub test_spams: Vec<PathBuf>,
}

/// Load a corpus rooted at `root`.
///
/// The root must contain exactly a `train` and a `test` directory, and each
/// of those exactly a `ham` and a `spam` directory. Any missing or extra
/// entry at either level is a layout error. The files inside the four leaf
/// directories are returned as-is; ordering is not significant.
pub fn load_corpus(root: &Path) -> Result<CorpusSplit> {
    check_entries(root, &["test", "train"])?;
    check_entries(&root.join("train"), &["ham", "spam"])?;
    check_entries(&root.join("test"), &["ham", "spam"])?;

    let split = CorpusSplit {
        train_hams: list_files(&root.join("train").join("ham"))?,
        train_spams: list_files(&root.join("train").join("spam"))?,
        test_hams: list_files(&root.join("test").join("ham"))?,
        test_spams: list_files(&root.join("test").join("spam"))?,
    };

    info!(
        "Loaded corpus from {}: {} train ham, {} train spam, {} test ham, {} test spam",
        root.display(),
        split.train_hams.len(),
        split.train_spams.len(),
        split.test_hams.len(),
        split.test_spams.len()
    );

    Ok(split)
}

fn check_entries(dir: &Path, expected: &[&str]) -> Result<()> {
    let mut found = BTreeSet::new();
    for entry in fs::read_dir(dir)? {
        found.insert(entry?.file_name().to_string_lossy().into_owned());
    }

    let wanted: BTreeSet<String> = expected.iter().map(|s| s.to_string()).collect();
    if found != wanted {
        return Err(SpamFilterError::CorpusLayout(format!(
            "{} must contain exactly {:?}, found {:?}",
            dir.display(),
            wanted,
            found
        )));
    }

    Ok(())
}

fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        files.push(entry?.path());
    }
    Ok(files)
}
