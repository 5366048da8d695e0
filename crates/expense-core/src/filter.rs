//! Predicates that select transactions for highlighting

use serde::{Deserialize, Serialize};

use crate::models::Transaction;

/// Predicate over a single transaction
pub trait TransactionFilter {
    fn matches(&self, transaction: &Transaction) -> bool;
}

/// Matches transactions with a given amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmountFilter {
    pub target_amount: f64,
    /// Largest accepted difference from the target; 0.0 means exact
    #[serde(default)]
    pub tolerance: f64,
}

impl AmountFilter {
    pub fn new(target_amount: f64) -> Self {
        Self {
            target_amount,
            tolerance: 0.0,
        }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance.abs();
        self
    }
}

impl TransactionFilter for AmountFilter {
    fn matches(&self, transaction: &Transaction) -> bool {
        (transaction.amount() - self.target_amount).abs() <= self.tolerance
    }
}

/// Matches transactions with a given category (case-sensitive)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFilter {
    pub target_category: String,
}

impl CategoryFilter {
    pub fn new(target_category: impl Into<String>) -> Self {
        Self {
            target_category: target_category.into(),
        }
    }
}

impl TransactionFilter for CategoryFilter {
    fn matches(&self, transaction: &Transaction) -> bool {
        transaction.category() == self.target_category
    }
}

/// All supported filters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Filter {
    Amount(AmountFilter),
    Category(CategoryFilter),
}

impl TransactionFilter for Filter {
    fn matches(&self, transaction: &Transaction) -> bool {
        match self {
            Filter::Amount(f) => f.matches(transaction),
            Filter::Category(f) => f.matches(transaction),
        }
    }
}

impl From<AmountFilter> for Filter {
    fn from(filter: AmountFilter) -> Self {
        Filter::Amount(filter)
    }
}

impl From<CategoryFilter> for Filter {
    fn from(filter: CategoryFilter) -> Self {
        Filter::Category(filter)
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Filter::Amount(a) if a.tolerance > 0.0 => {
                write!(f, "amount = {:.2} (±{})", a.target_amount, a.tolerance)
            }
            Filter::Amount(a) => write!(f, "amount = {:.2}", a.target_amount),
            Filter::Category(c) => write!(f, "category = {}", c.target_category),
        }
    }
}

/// Indices, in store order, of every transaction the filter matches
pub fn apply_filter<F: TransactionFilter + ?Sized>(filter: &F, transactions: &[Transaction]) -> Vec<usize> {
    transactions
        .iter()
        .enumerate()
        .filter(|(_, t)| filter.matches(t))
        .map(|(i, _)| i)
        .collect()
}
