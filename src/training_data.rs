// src/training_data.rs
//! Loaders for the hand-written question/answer list and the general corpus.
//!
//! Both live as TOML files next to the binary so that the training step can
//! be exercised without editing code.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingPair {
    pub prompt: String,
    pub response: String,
}

#[derive(Debug, Deserialize)]
struct PairFile {
    #[serde(default)]
    pair: Vec<TrainingPair>,
}

/// One corpus file: a set of categories and a list of short dialogues.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Corpus {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub conversations: Vec<Vec<String>>,
}

impl Corpus {
    /// Each utterance becomes the prompt for the one that follows it.
    pub fn pairs(&self) -> Vec<TrainingPair> {
        self.conversations
            .iter()
            .flat_map(|conversation| {
                conversation.windows(2).map(|w| TrainingPair {
                    prompt: w[0].clone(),
                    response: w[1].clone(),
                })
            })
            .collect()
    }

    pub fn category(&self) -> Option<&str> {
        self.categories.first().map(String::as_str)
    }
}

pub fn parse_training_pairs(source: &str) -> Result<Vec<TrainingPair>, toml::de::Error> {
    toml::from_str::<PairFile>(source).map(|file| file.pair)
}

pub fn load_training_pairs(path: &Path) -> Result<Vec<TrainingPair>, DataError> {
    let source = read(path)?;
    parse_training_pairs(&source).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_corpus_file(path: &Path) -> Result<Corpus, DataError> {
    let source = read(path)?;
    toml::from_str(&source).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads every `*.toml` file in `dir`, sorted by file name.
pub fn load_corpus_dir(dir: &Path) -> Result<Vec<Corpus>, DataError> {
    let entries = fs::read_dir(dir).map_err(|source| DataError::Read {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| DataError::Read {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "toml") {
            files.push(path);
        }
    }
    files.sort();

    files.iter().map(|path| load_corpus_file(path)).collect()
}

fn read(path: &Path) -> Result<String, DataError> {
    fs::read_to_string(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })
}
