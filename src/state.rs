// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::engine::{EngineConfig, ResponseEngine};
use crate::storage::StatementStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub engine: ResponseEngine,
    pub max_message_chars: usize,
}

impl AppState {
    pub fn new(store: StatementStore, config: &Config) -> Self {
        Self {
            engine: ResponseEngine::new(store, EngineConfig::from(config)),
            max_message_chars: config.max_message_chars,
        }
    }
}
