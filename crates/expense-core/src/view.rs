//! Read-only projection of the store handed to the display layer

use expense_utils::format_amount;
use serde::Serialize;

use crate::filter::{apply_filter, Filter};
use crate::models::Transaction;

/// One transaction row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRow {
    /// 1-based position in the list
    pub serial: usize,
    pub amount: f64,
    pub category: String,
    pub timestamp: String,
}

/// Rows, total and highlights derived from the store.
///
/// Always rebuilt from scratch with [`ViewState::compute`]; never patched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewState {
    pub rows: Vec<TransactionRow>,
    pub total: f64,
    /// Ascending indices into `rows`
    pub highlighted: Vec<usize>,
}

impl ViewState {
    pub fn compute(transactions: &[Transaction], filter: Option<&Filter>) -> Self {
        let rows = transactions
            .iter()
            .enumerate()
            .map(|(i, t)| TransactionRow {
                serial: i + 1,
                amount: t.amount(),
                category: t.category().to_string(),
                timestamp: t.timestamp_display(),
            })
            .collect();

        let highlighted = match filter {
            Some(f) => apply_filter(f, transactions),
            None => vec![],
        };

        Self {
            rows,
            total: transactions.iter().map(Transaction::amount).sum(),
            highlighted,
        }
    }

    /// Number of displayed rows, including the trailing total row
    pub fn row_count(&self) -> usize {
        self.rows.len() + 1
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlighted.binary_search(&index).is_ok()
    }

    pub fn formatted_total(&self) -> String {
        format_amount(self.total)
    }
}

/// Receives every freshly computed view
pub trait ViewPublisher {
    fn publish(&mut self, view: &ViewState);
}

/// Publisher that keeps the most recent view
#[derive(Debug, Default)]
pub struct LatestView {
    latest: Option<ViewState>,
    publish_count: usize,
}

impl LatestView {
    pub fn latest(&self) -> Option<&ViewState> {
        self.latest.as_ref()
    }

    pub fn publish_count(&self) -> usize {
        self.publish_count
    }
}

impl ViewPublisher for LatestView {
    fn publish(&mut self, view: &ViewState) {
        self.latest = Some(view.clone());
        self.publish_count += 1;
    }
}
