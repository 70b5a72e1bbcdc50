#![allow(dead_code)]

use std::path::{Path, PathBuf};

use alumni_chatbot::{
    config::Config,
    services::trainer::Trainer,
    storage::{Access, StatementStore},
    training_data::{load_corpus_dir, load_training_pairs},
};

pub fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

pub fn test_config(db_path: &Path) -> Config {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    Config {
        database_path: db_path.to_path_buf(),
        static_dir: root.join("public"),
        training_pairs: data_dir().join("training_pairs.toml"),
        corpus_dir: data_dir().join("corpus").join("english"),
        ..Config::default()
    }
}

/// Runs the full training pass (corpus, then pairs) into `db_path`.
pub async fn train_bundled(config: &Config) {
    let corpora = load_corpus_dir(&config.corpus_dir).unwrap();
    let pairs = load_training_pairs(&config.training_pairs).unwrap();

    let store = StatementStore::open(&config.database_path, Access::ReadWrite)
        .await
        .unwrap();
    let trainer = Trainer::new(store.clone());
    trainer.train_corpus(&corpora).await.unwrap();
    trainer.train_pairs(&pairs).await.unwrap();
    store.close().await;
}

/// Trains into a fresh database and reopens it read-only, like the server does.
pub async fn trained_reader(config: &Config) -> StatementStore {
    train_bundled(config).await;
    StatementStore::open(&config.database_path, Access::ReadOnly)
        .await
        .unwrap()
}
