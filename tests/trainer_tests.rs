mod common;

use alumni_chatbot::services::engine::{EngineConfig, ResponseEngine};
use alumni_chatbot::services::trainer::Trainer;
use alumni_chatbot::storage::{Access, StatementStore};
use alumni_chatbot::training_data::{load_corpus_dir, load_training_pairs};

#[test]
fn test_bundled_data_loads() {
    let dir = tempfile::tempdir().unwrap();
    let config = common::test_config(&dir.path().join("db.sqlite3"));

    let corpora = load_corpus_dir(&config.corpus_dir).unwrap();
    assert!(corpora.len() >= 19);
    assert!(corpora.iter().all(|c| c.category().is_some()));
    let categories: Vec<&str> = corpora.iter().filter_map(|c| c.category()).collect();
    for expected in ["AI", "food", "humor", "science", "greetings", "trivia"] {
        assert!(categories.contains(&expected), "missing corpus category {expected}");
    }

    let pairs = load_training_pairs(&config.training_pairs).unwrap();
    assert!(pairs.iter().any(|p| p.prompt == "What's new on campus?"));
}

#[tokio::test]
async fn test_training_writes_corpus_and_pairs() {
    let dir = tempfile::tempdir().unwrap();
    let config = common::test_config(&dir.path().join("db.sqlite3"));

    let corpora = load_corpus_dir(&config.corpus_dir).unwrap();
    let pairs = load_training_pairs(&config.training_pairs).unwrap();
    let corpus_pairs: usize = corpora.iter().map(|c| c.pairs().len()).sum();

    let store = StatementStore::open(&config.database_path, Access::ReadWrite)
        .await
        .unwrap();
    let trainer = Trainer::new(store.clone());
    assert!(!trainer.conversation().is_empty());

    let written = trainer.train_corpus(&corpora).await.unwrap();
    assert_eq!(written as usize, corpus_pairs);
    let written = trainer.train_pairs(&pairs).await.unwrap();
    assert_eq!(written as usize, pairs.len());

    assert_eq!(
        store.statement_count().await.unwrap() as usize,
        corpus_pairs + pairs.len()
    );
}

#[tokio::test]
async fn test_training_twice_does_not_fail() {
    let dir = tempfile::tempdir().unwrap();
    let config = common::test_config(&dir.path().join("db.sqlite3"));

    common::train_bundled(&config).await;
    let reader = StatementStore::open(&config.database_path, Access::ReadOnly)
        .await
        .unwrap();
    let first = reader.statement_count().await.unwrap();
    reader.close().await;

    common::train_bundled(&config).await;
    let reader = StatementStore::open(&config.database_path, Access::ReadOnly)
        .await
        .unwrap();
    assert_eq!(reader.statement_count().await.unwrap(), first * 2);

    let engine = ResponseEngine::new(
        reader,
        EngineConfig {
            similarity_threshold: 0.9,
            default_response: "Sorry, I don't understand that.".to_string(),
        },
    );
    let reply = engine.get_response("Can you review my resume?").await.unwrap();
    assert!(reply.text.starts_with("Yes! Please send your latest resume"));
}

#[tokio::test]
async fn test_each_run_gets_its_own_conversation_id() {
    let dir = tempfile::tempdir().unwrap();
    let store = StatementStore::open(&dir.path().join("db.sqlite3"), Access::ReadWrite)
        .await
        .unwrap();

    let a = Trainer::new(store.clone());
    let b = Trainer::new(store);
    assert_ne!(a.conversation(), b.conversation());
}
