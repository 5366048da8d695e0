//! In-memory transaction store

use crate::error::{CoreError, CoreResult};
use crate::models::Transaction;

/// Ordered collection of transactions in insertion order.
///
/// Duplicates by value are allowed. Read access is either a borrowed slice or
/// an owned [`snapshot`](TransactionStore::snapshot), so nothing outside the
/// store can change its contents.
#[derive(Debug, Default, Clone)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transaction.
    ///
    /// Fails with [`CoreError::InvalidEntity`] if the transaction has a
    /// non-finite amount or a blank category.
    pub fn add(&mut self, transaction: Transaction) -> CoreResult<()> {
        if !transaction.is_well_formed() {
            return Err(CoreError::InvalidEntity {
                reason: format!(
                    "amount {} / category '{}' cannot be stored",
                    transaction.amount(),
                    transaction.category()
                ),
            });
        }
        self.transactions.push(transaction);
        Ok(())
    }

    /// Remove the first transaction equal to `transaction`.
    ///
    /// Returns `false` when nothing matched.
    pub fn remove(&mut self, transaction: &Transaction) -> bool {
        match self.transactions.iter().position(|t| t == transaction) {
            Some(pos) => {
                self.transactions.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Remove and return the transaction at `index`
    pub fn undo(&mut self, index: usize) -> CoreResult<Transaction> {
        if index >= self.transactions.len() {
            return Err(CoreError::IndexOutOfRange {
                index,
                len: self.transactions.len(),
            });
        }
        Ok(self.transactions.remove(index))
    }

    /// Owned copy of the current contents
    pub fn snapshot(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    pub fn as_slice(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, index: usize) -> Option<&Transaction> {
        self.transactions.get(index)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Sum of all amounts
    pub fn total(&self) -> f64 {
        self.transactions.iter().map(Transaction::amount).sum()
    }
}
