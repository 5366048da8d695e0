//! Core data models for the tracker

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display format for transaction timestamps
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M";

/// One recorded expense.
///
/// Fields are private so a transaction cannot change after construction.
/// Construction does not validate; the controller validates before it builds
/// one, and direct callers take responsibility for the values they pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    amount: f64,
    category: String,
    timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Create a transaction stamped with the current time
    pub fn new(amount: f64, category: impl Into<String>) -> Self {
        Self::with_timestamp(amount, category, Utc::now())
    }

    /// Create a transaction with an explicit timestamp
    pub fn with_timestamp(amount: f64, category: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            amount,
            category: category.into(),
            timestamp,
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Get the timestamp formatted for display
    pub fn timestamp_display(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Check that the transaction could have come from a validated path
    pub(crate) fn is_well_formed(&self) -> bool {
        self.amount.is_finite() && !self.category.trim().is_empty()
    }
}
