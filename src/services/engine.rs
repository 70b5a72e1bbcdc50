// src/services/engine.rs
use crate::config::Config;
use crate::services::similarity::{normalize, similarity};
use crate::storage::StatementStore;

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub similarity_threshold: f64,
    pub default_response: String,
}

impl From<&Config> for EngineConfig {
    fn from(cfg: &Config) -> Self {
        Self {
            similarity_threshold: cfg.similarity_threshold,
            default_response: cfg.default_response.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    /// Similarity of the matched prompt; 0.0 for the fallback reply.
    pub confidence: f64,
}

/// Best-match responder over previously trained statements.
#[derive(Debug, Clone)]
pub struct ResponseEngine {
    store: StatementStore,
    config: EngineConfig,
}

impl ResponseEngine {
    pub fn new(store: StatementStore, config: EngineConfig) -> Self {
        Self { store, config }
    }

    pub async fn get_response(&self, text: &str) -> Result<Reply, sqlx::Error> {
        let input = normalize(text);
        let prompts = self.store.known_prompts().await?;

        // first prompt wins ties
        let mut best: Option<(&str, f64)> = None;
        for prompt in &prompts {
            let score = similarity(&input, prompt);
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((prompt.as_str(), score));
            }
            if score >= 1.0 {
                break;
            }
        }

        let Some((prompt, confidence)) = best else {
            tracing::debug!("no trained statements, using default response");
            return Ok(self.fallback());
        };

        if confidence < self.config.similarity_threshold {
            tracing::debug!(confidence, closest = prompt, "below similarity threshold");
            return Ok(self.fallback());
        }

        let responses = self.store.responses_to(prompt).await?;
        match responses.into_iter().next() {
            Some(chosen) => {
                tracing::debug!(
                    confidence,
                    matched = prompt,
                    occurrences = chosen.occurrences,
                    statement_id = chosen.latest_id,
                    "matched trained prompt"
                );
                Ok(Reply {
                    text: chosen.text,
                    confidence,
                })
            }
            None => Ok(self.fallback()),
        }
    }

    fn fallback(&self) -> Reply {
        Reply {
            text: self.config.default_response.clone(),
            confidence: 0.0,
        }
    }
}
