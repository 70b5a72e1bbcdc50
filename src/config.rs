// src/config.rs
use std::{env, net::SocketAddr, path::PathBuf, str::FromStr};

use axum::http::HeaderValue;
use thiserror::Error;

pub const DEFAULT_RESPONSE: &str = "Sorry, I don't understand that.";
pub const DEFAULT_THRESHOLD: f64 = 0.9;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} has an invalid value: {value:?}")]
    Invalid { var: &'static str, value: String },

    #[error("CHATBOT_SIMILARITY_THRESHOLD must be between 0 and 1, got {0}")]
    ThresholdOutOfRange(f64),

    #[error("unknown server variant {0:?} (expected \"current\" or \"legacy\")")]
    UnknownVariant(String),
}

/// Which flavour of the chat API the server exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// `POST /api/chat` with JSON in and out, single allowed origin.
    Current,
    /// `GET /get?msg=` returning plain text, any origin.
    Legacy,
}

impl Variant {
    fn default_bind(self) -> SocketAddr {
        match self {
            Variant::Current => SocketAddr::from(([0, 0, 0, 0], 5001)),
            Variant::Legacy => SocketAddr::from(([127, 0, 0, 1], 5000)),
        }
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "current" => Ok(Variant::Current),
            "legacy" => Ok(Variant::Legacy),
            other => Err(ConfigError::UnknownVariant(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: PathBuf,
    pub variant: Variant,
    pub bind: SocketAddr,
    pub allowed_origin: HeaderValue,
    pub static_dir: PathBuf,
    pub similarity_threshold: f64,
    pub default_response: String,
    pub max_message_chars: usize,
    pub training_pairs: PathBuf,
    pub corpus_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("database.sqlite3"),
            variant: Variant::Current,
            bind: Variant::Current.default_bind(),
            allowed_origin: HeaderValue::from_static("http://localhost:8080"),
            static_dir: PathBuf::from("public"),
            similarity_threshold: DEFAULT_THRESHOLD,
            default_response: DEFAULT_RESPONSE.to_string(),
            max_message_chars: 1000,
            training_pairs: PathBuf::from("data/training_pairs.toml"),
            corpus_dir: PathBuf::from("data/corpus/english"),
        }
    }
}

impl Config {
    /// Reads `CHATBOT_*` variables (after loading `.env` if one exists).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Config::default();

        if let Some(v) = lookup("CHATBOT_VARIANT") {
            cfg.variant = v.parse()?;
        }
        cfg.bind = match lookup("CHATBOT_BIND") {
            Some(v) => parse_var("CHATBOT_BIND", v)?,
            None => cfg.variant.default_bind(),
        };
        if let Some(v) = lookup("CHATBOT_DATABASE_PATH") {
            cfg.database_path = PathBuf::from(v);
        }
        if let Some(v) = lookup("CHATBOT_ALLOWED_ORIGIN") {
            cfg.allowed_origin = HeaderValue::from_str(v.trim()).map_err(|_| ConfigError::Invalid {
                var: "CHATBOT_ALLOWED_ORIGIN",
                value: v.clone(),
            })?;
        }
        if let Some(v) = lookup("CHATBOT_STATIC_DIR") {
            cfg.static_dir = PathBuf::from(v);
        }
        if let Some(v) = lookup("CHATBOT_SIMILARITY_THRESHOLD") {
            let threshold: f64 = parse_var("CHATBOT_SIMILARITY_THRESHOLD", v)?;
            if !(0.0..=1.0).contains(&threshold) {
                return Err(ConfigError::ThresholdOutOfRange(threshold));
            }
            cfg.similarity_threshold = threshold;
        }
        if let Some(v) = lookup("CHATBOT_DEFAULT_RESPONSE") {
            cfg.default_response = v;
        }
        if let Some(v) = lookup("CHATBOT_MAX_MESSAGE_CHARS") {
            cfg.max_message_chars = parse_var("CHATBOT_MAX_MESSAGE_CHARS", v)?;
        }
        if let Some(v) = lookup("CHATBOT_TRAINING_PAIRS") {
            cfg.training_pairs = PathBuf::from(v);
        }
        if let Some(v) = lookup("CHATBOT_CORPUS_DIR") {
            cfg.corpus_dir = PathBuf::from(v);
        }

        Ok(cfg)
    }
}

fn parse_var<T: FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { var, value })
}
