// src/storage.rs
//! File-backed statement storage shared by the trainer and the server.
//!
//! Each row is one trained response together with the prompt it answers.
//! The trainer opens the file read-write and appends; the server opens the
//! same file read-only.

use std::path::Path;

use sqlx::{
    Row,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions},
};

use crate::services::similarity::normalize;
use crate::training_data::TrainingPair;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    ReadOnly,
    ReadWrite,
}

/// A stored response candidate for one prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredResponse {
    pub text: String,
    /// How many times this exact response was trained for the prompt.
    pub occurrences: i64,
    /// Highest row id among the occurrences; larger means trained later.
    pub latest_id: i64,
}

#[derive(Debug, Clone)]
pub struct StatementStore {
    pool: SqlitePool,
}

impl StatementStore {
    pub async fn open(path: &Path, access: Access) -> Result<Self, sqlx::Error> {
        let read_only = access == Access::ReadOnly;

        if !read_only {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
        }

        // rollback journal: WAL files would need write access for readers
        let options = SqliteConnectOptions::new()
            .filename(path)
            .read_only(read_only)
            .create_if_missing(!read_only)
            .journal_mode(SqliteJournalMode::Delete);

        let pool = SqlitePoolOptions::new()
            .max_connections(if read_only { 5 } else { 1 })
            .connect_with(options)
            .await?;

        let store = Self { pool };
        if !read_only {
            store.migrate().await?;
        }
        Ok(store)
    }

    async fn migrate(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS statement (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                text TEXT NOT NULL,
                search_text TEXT NOT NULL,
                in_response_to TEXT NOT NULL,
                search_in_response_to TEXT NOT NULL,
                conversation TEXT NOT NULL,
                category TEXT,
                created_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_statement_search_in_response_to \
             ON statement(search_in_response_to)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Appends every pair in a single transaction. Returns the number of rows written.
    pub async fn insert_pairs(
        &self,
        conversation: &str,
        category: Option<&str>,
        pairs: &[TrainingPair],
    ) -> Result<u64, sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        let mut written = 0;

        for pair in pairs {
            let result = sqlx::query(
                r#"
                INSERT INTO statement
                    (text, search_text, in_response_to, search_in_response_to, conversation, category)
                VALUES (?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&pair.response)
            .bind(normalize(&pair.response))
            .bind(&pair.prompt)
            .bind(normalize(&pair.prompt))
            .bind(conversation)
            .bind(category)
            .execute(&mut *tx)
            .await?;
            written += result.rows_affected();
        }

        tx.commit().await?;
        Ok(written)
    }

    /// Every distinct normalized prompt that has a response, in first-trained order.
    pub async fn known_prompts(&self) -> Result<Vec<String>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT search_in_response_to
            FROM statement
            GROUP BY search_in_response_to
            ORDER BY MIN(id)
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| row.try_get::<String, _>("search_in_response_to"))
            .collect()
    }

    /// Responses stored for a normalized prompt, most frequent first, then most recent.
    pub async fn responses_to(&self, search_prompt: &str) -> Result<Vec<StoredResponse>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT text, COUNT(*) AS occurrences, MAX(id) AS latest_id
            FROM statement
            WHERE search_in_response_to = ?
            GROUP BY text
            ORDER BY occurrences DESC, latest_id DESC
            "#,
        )
        .bind(search_prompt)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> Result<StoredResponse, sqlx::Error> {
                Ok(StoredResponse {
                    text: row.try_get("text")?,
                    occurrences: row.try_get("occurrences")?,
                    latest_id: row.try_get("latest_id")?,
                })
            })
            .collect()
    }

    pub async fn statement_count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM statement")
            .fetch_one(&self.pool)
            .await
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
