// src/services/trainer.rs
use uuid::Uuid;

use crate::storage::StatementStore;
use crate::training_data::{Corpus, TrainingPair};

/// Writes training data into the statement store.
///
/// Nothing is deduplicated: training the same data twice stores it twice,
/// which only makes those responses more likely to be picked.
#[derive(Debug)]
pub struct Trainer {
    store: StatementStore,
    conversation: String,
}

impl Trainer {
    pub fn new(store: StatementStore) -> Self {
        Self {
            store,
            conversation: Uuid::new_v4().to_string(),
        }
    }

    /// Id stamped on every statement written by this trainer.
    pub fn conversation(&self) -> &str {
        &self.conversation
    }

    pub async fn train_corpus(&self, corpora: &[Corpus]) -> Result<u64, sqlx::Error> {
        let mut written = 0;
        for corpus in corpora {
            let pairs = corpus.pairs();
            written += self
                .store
                .insert_pairs(&self.conversation, corpus.category(), &pairs)
                .await?;
            tracing::info!(
                category = corpus.category().unwrap_or("uncategorized"),
                statements = pairs.len(),
                "trained corpus file"
            );
        }
        Ok(written)
    }

    pub async fn train_pairs(&self, pairs: &[TrainingPair]) -> Result<u64, sqlx::Error> {
        let written = self
            .store
            .insert_pairs(&self.conversation, None, pairs)
            .await?;
        tracing::info!(statements = written, "trained question/answer list");
        Ok(written)
    }
}
