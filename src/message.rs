// src/message.rs
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Query string of the legacy `GET /get` endpoint.
#[derive(Debug, Deserialize)]
pub struct LegacyQuery {
    pub msg: Option<String>,
}

/// Rejects absent, blank or oversized input and returns the trimmed text.
pub fn validate_message(message: Option<&str>, max_chars: usize) -> Result<&str, AppError> {
    let trimmed = message.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(AppError::EmptyMessage);
    }
    if trimmed.chars().count() > max_chars {
        return Err(AppError::MessageTooLong { limit: max_chars });
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_and_trims() {
        assert_eq!(validate_message(Some("  hello \n"), 10).unwrap(), "hello");
    }

    #[test]
    fn rejects_missing_blank_and_long() {
        assert!(matches!(validate_message(None, 10), Err(AppError::EmptyMessage)));
        assert!(matches!(validate_message(Some("   "), 10), Err(AppError::EmptyMessage)));
        assert!(matches!(
            validate_message(Some("abcdefghijk"), 10),
            Err(AppError::MessageTooLong { limit: 10 })
        ));
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        assert!(validate_message(Some("ééééé"), 5).is_ok());
    }

    #[test]
    fn missing_field_deserializes_to_none() {
        let req: ChatRequest = serde_json::from_str("{}").unwrap();
        assert!(req.message.is_none());
    }
}
