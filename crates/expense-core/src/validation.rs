//! Validation of proposed transactions

use expense_config::ValidationConfig;

use crate::error::{CoreError, CoreResult};

/// Rules a proposed (amount, category) pair must satisfy
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationPolicy {
    max_amount: f64,
    allowed_categories: Vec<String>,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self::from_config(&ValidationConfig::default())
    }
}

impl ValidationPolicy {
    /// Policy with the given ceiling that accepts any non-empty category
    pub fn new(max_amount: f64) -> Self {
        Self {
            max_amount,
            allowed_categories: vec![],
        }
    }

    pub fn from_config(config: &ValidationConfig) -> Self {
        Self {
            max_amount: config.max_amount,
            allowed_categories: config.allowed_categories.clone(),
        }
    }

    /// Restrict categories to `categories`
    pub fn with_allowed_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn max_amount(&self) -> f64 {
        self.max_amount
    }

    /// Check a proposed transaction, returning the first rule it breaks
    pub fn validate(&self, amount: f64, category: &str) -> CoreResult<()> {
        if amount.is_nan() || amount <= 0.0 || amount > self.max_amount {
            return Err(CoreError::InvalidAmount {
                amount,
                max: self.max_amount,
            });
        }

        if category.trim().is_empty() {
            return Err(CoreError::InvalidCategory {
                category: category.to_string(),
                reason: "category must not be empty".to_string(),
            });
        }

        if !self.allowed_categories.is_empty()
            && !self.allowed_categories.iter().any(|c| c == category)
        {
            return Err(CoreError::InvalidCategory {
                category: category.to_string(),
                reason: format!("expected one of: {}", self.allowed_categories.join(", ")),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_amounts() {
        let policy = ValidationPolicy::default();
        for amount in [0.01, 50.0, 75.0, 100.0, 1000.0] {
            assert!(policy.validate(amount, "food").is_ok(), "{} should be valid", amount);
        }
    }

    #[test]
    fn test_rejects_out_of_range_amounts() {
        let policy = ValidationPolicy::default();
        for amount in [0.0, -5.0, 1000.01, 1500.0, f64::NAN, f64::INFINITY] {
            let err = policy.validate(amount, "food").unwrap_err();
            assert!(matches!(err, CoreError::InvalidAmount { .. }), "{} should be invalid", amount);
        }
    }

    #[test]
    fn test_rejects_empty_category() {
        let policy = ValidationPolicy::default();
        assert!(matches!(
            policy.validate(50.0, ""),
            Err(CoreError::InvalidCategory { .. })
        ));
        assert!(matches!(
            policy.validate(50.0, "  \t"),
            Err(CoreError::InvalidCategory { .. })
        ));
    }

    #[test]
    fn test_amount_checked_before_category() {
        let policy = ValidationPolicy::default();
        let err = policy.validate(1500.0, "").unwrap_err();
        assert!(matches!(err, CoreError::InvalidAmount { .. }));
    }

    #[test]
    fn test_custom_ceiling() {
        let policy = ValidationPolicy::new(100.0);
        assert!(policy.validate(100.0, "food").is_ok());
        assert!(policy.validate(100.5, "food").is_err());
        assert_eq!(policy.max_amount(), 100.0);
    }

    #[test]
    fn test_allowed_categories() {
        let policy = ValidationPolicy::default().with_allowed_categories(["food", "travel"]);
        assert!(policy.validate(10.0, "food").is_ok());
        assert!(policy.validate(10.0, "travel").is_ok());

        let err = policy.validate(10.0, "Food").unwrap_err();
        assert!(matches!(err, CoreError::InvalidCategory { .. }));
        assert!(err.to_string().contains("food, travel"));
    }

    #[test]
    fn test_from_config() {
        let config = ValidationConfig {
            max_amount: 200.0,
            allowed_categories: vec!["bills".to_string()],
        };
        let policy = ValidationPolicy::from_config(&config);
        assert!(policy.validate(150.0, "bills").is_ok());
        assert!(policy.validate(250.0, "bills").is_err());
        assert!(policy.validate(150.0, "food").is_err());
    }
}
