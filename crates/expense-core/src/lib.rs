//! Transaction store, validation and view synchronization for the expense tracker

pub mod controller;
pub mod error;
pub mod filter;
pub mod models;
pub mod store;
pub mod validation;
pub mod view;

pub use controller::Controller;
pub use error::{CoreError, CoreResult, ErrorCode, ErrorSeverity, ErrorSink, LogErrorSink, RecordingErrorSink};
pub use filter::{apply_filter, AmountFilter, CategoryFilter, Filter, TransactionFilter};
pub use models::Transaction;
pub use store::TransactionStore;
pub use validation::ValidationPolicy;
pub use view::{LatestView, TransactionRow, ViewPublisher, ViewState};
