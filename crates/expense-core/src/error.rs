//! Error types for expense-core
//!
//! Every recoverable failure in the core maps to one [`CoreError`] variant.
//! Each variant carries an [`ErrorCode`] for programmatic handling and can be
//! expanded into [`ErrorDetails`] with suggestions for the user.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Amount is not positive or exceeds the ceiling
    InvalidAmount,
    /// Category is empty or not allowed
    InvalidCategory,
    /// Undo index outside the store
    IndexOutOfRange,
    /// Malformed transaction inserted directly into the store
    InvalidEntity,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::InvalidAmount => write!(f, "INVALID_AMOUNT"),
            ErrorCode::InvalidCategory => write!(f, "INVALID_CATEGORY"),
            ErrorCode::IndexOutOfRange => write!(f, "INDEX_OUT_OF_RANGE"),
            ErrorCode::InvalidEntity => write!(f, "INVALID_ENTITY"),
        }
    }
}

/// Detailed error information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Suggestions for resolution
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ErrorDetails {
    /// Create a new error detail
    pub fn new(code: ErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            details: None,
            suggestions: vec![],
        }
    }

    /// Add detail information
    pub fn with_detail(mut self, detail: serde_json::Value) -> Self {
        self.details = Some(detail);
        self
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestions.push(suggestion);
        self
    }
}

impl std::fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, "\nDetails: {}", details)?;
        }
        if !self.suggestions.is_empty() {
            write!(f, "\nSuggestions:")?;
            for suggestion in &self.suggestions {
                write!(f, "\n  - {}", suggestion)?;
            }
        }
        Ok(())
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Rejected user input; state is unchanged
    Warning,
    /// Caller broke the store contract
    Error,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
        }
    }
}

impl ErrorSeverity {
    /// Log level used when reporting an error of this severity
    pub fn log_level(&self) -> log::Level {
        match self {
            ErrorSeverity::Warning => log::Level::Warn,
            ErrorSeverity::Error => log::Level::Error,
        }
    }
}

/// Main error type for expense-core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Invalid amount: {amount} (must be greater than 0 and at most {max})")]
    InvalidAmount { amount: f64, max: f64 },

    #[error("Invalid category '{category}': {reason}")]
    InvalidCategory { category: String, reason: String },

    #[error("Invalid transaction index {index} (store holds {len} transactions)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid transaction: {reason}")]
    InvalidEntity { reason: String },
}

impl CoreError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::InvalidAmount { .. } => ErrorCode::InvalidAmount,
            CoreError::InvalidCategory { .. } => ErrorCode::InvalidCategory,
            CoreError::IndexOutOfRange { .. } => ErrorCode::IndexOutOfRange,
            CoreError::InvalidEntity { .. } => ErrorCode::InvalidEntity,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoreError::InvalidEntity { .. } => ErrorSeverity::Error,
            _ => ErrorSeverity::Warning,
        }
    }

    /// Convert to detailed error info
    pub fn to_details(&self) -> ErrorDetails {
        let mut details = ErrorDetails::new(self.code(), self.to_string());

        match self {
            CoreError::InvalidAmount { amount, max } => {
                details = details.with_detail(serde_json::json!({ "amount": amount, "max": max }));
                details = details.with_suggestion(format!(
                    "Enter an amount greater than 0 and no more than {}.",
                    max
                ));
            }
            CoreError::InvalidCategory { .. } => {
                details = details.with_suggestion(
                    "Enter a non-empty category such as 'food' or 'travel'.".to_string(),
                );
            }
            CoreError::IndexOutOfRange { len, .. } => {
                if *len == 0 {
                    details = details
                        .with_suggestion("There are no transactions to undo.".to_string());
                } else {
                    details = details.with_suggestion(format!(
                        "Choose an index between 0 and {}.",
                        len - 1
                    ));
                }
            }
            CoreError::InvalidEntity { .. } => {}
        }

        details
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

/// Receives a message for every failed controller operation
pub trait ErrorSink {
    fn report_error(&mut self, message: &str);
}

/// Error sink using log crate
#[derive(Debug, Default)]
pub struct LogErrorSink;

impl ErrorSink for LogErrorSink {
    fn report_error(&mut self, message: &str) {
        log::error!(target: "expense_tracker::error", "{}", message);
    }
}

/// Error sink that keeps every reported message
#[derive(Debug, Default)]
pub struct RecordingErrorSink {
    messages: Vec<String>,
}

impl RecordingErrorSink {
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn error_count(&self) -> usize {
        self.messages.len()
    }

    pub fn is_error_reported(&self) -> bool {
        !self.messages.is_empty()
    }
}

impl ErrorSink for RecordingErrorSink {
    fn report_error(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

// ==================== Tests ====================
