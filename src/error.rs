//! Error types for the crisis simulation pipeline
//!
//! Three failure classes exist: fatal preconditions (configuration and
//! credentials, surfaced to the operator), provider construction failures,
//! and input boundary violations. Per-task generation failures are NOT
//! errors at this level — the executor absorbs them into the sentinel so
//! the summary phase always receives a value per task.

use crate::llm::provider::LlmError;
use thiserror::Error;

/// Main error type for simulation operations
#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("LLM provider error: {0}")]
    Provider(#[from] LlmError),

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

impl SimulatorError {
    /// Create an input boundary error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Operator-facing message with secrets redacted and length capped
    pub fn sanitized_message(&self) -> String {
        sanitize_error_message(&self.to_string())
    }
}

/// Sanitize error messages to prevent credential leakage
pub(crate) fn sanitize_error_message(message: &str) -> String {
    let mut sanitized = message.to_string();

    // Redact common secret patterns (API keys, bearer tokens)
    sanitized = regex::Regex::new(r"(?i)(password|token|key|secret|bearer)[=:]?\s+\S+")
        .unwrap()
        .replace_all(&sanitized, "${1} ***")
        .to_string();

    sanitized = regex::Regex::new(r"(?i)(password|token|key|secret)[=:]\S+")
        .unwrap()
        .replace_all(&sanitized, "${1}=***")
        .to_string();

    // Truncate very long messages - ensure total length is <= 500
    if sanitized.len() > 500 {
        let truncate_suffix = "...[truncated]";
        let max_content_len = 500 - truncate_suffix.len();
        sanitized = format!("{}{}", &sanitized[..max_content_len], truncate_suffix);
    }

    sanitized
}

/// Result type for simulation operations
pub type SimulatorResult<T> = Result<T, SimulatorError>;
