//! Orchestration between user input, the store and the display layer
//!
//! The controller owns the [`TransactionStore`]. Every successful operation
//! ends by rebuilding the whole [`ViewState`] and handing it to the
//! [`ViewPublisher`]; every failed one reports exactly once to the
//! [`ErrorSink`] and leaves both the store and the published view untouched.

use crate::error::{CoreError, CoreResult, ErrorSink};
use crate::filter::Filter;
use crate::models::Transaction;
use crate::store::TransactionStore;
use crate::validation::ValidationPolicy;
use crate::view::{ViewPublisher, ViewState};

pub struct Controller<E: ErrorSink, P: ViewPublisher> {
    store: TransactionStore,
    policy: ValidationPolicy,
    error_sink: E,
    publisher: P,
    /// Set by `set_filter`, not yet applied
    pending_filter: Option<Filter>,
    /// Filter the current highlights were computed with
    applied_filter: Option<Filter>,
    view: ViewState,
}

impl<E: ErrorSink, P: ViewPublisher> Controller<E, P> {
    /// Create a controller with an empty store and publish the initial view
    pub fn new(policy: ValidationPolicy, error_sink: E, publisher: P) -> Self {
        let mut controller = Self {
            store: TransactionStore::new(),
            policy,
            error_sink,
            publisher,
            pending_filter: None,
            applied_filter: None,
            view: ViewState::default(),
        };
        controller.refresh();
        controller
    }

    /// Validate and record a new transaction.
    ///
    /// Returns `false` after reporting the error when the input is rejected.
    pub fn add_transaction(&mut self, amount: f64, category: &str) -> bool {
        let result = self.try_add_transaction(amount, category);
        self.settle(result)
    }

    fn try_add_transaction(&mut self, amount: f64, category: &str) -> CoreResult<()> {
        self.policy.validate(amount, category)?;
        self.store.add(Transaction::new(amount, category))?;
        log::info!("Added transaction: {} / {}", amount, category);
        Ok(())
    }

    /// Remove the transaction at `index`
    pub fn undo_transaction(&mut self, index: usize) -> bool {
        let result = self.store.undo(index).map(|removed| {
            log::info!(
                "Undid transaction #{}: {} / {}",
                index,
                removed.amount(),
                removed.category()
            );
        });
        self.settle(result)
    }

    /// Remove the first transaction equal to `transaction`.
    ///
    /// An absent transaction is not an error; nothing is reported and the
    /// view is left as it is.
    pub fn remove_transaction(&mut self, transaction: &Transaction) -> bool {
        if self.store.remove(transaction) {
            log::info!(
                "Removed transaction: {} / {}",
                transaction.amount(),
                transaction.category()
            );
            self.refresh();
            true
        } else {
            log::debug!("Remove ignored, transaction not in store");
            false
        }
    }

    /// Set the filter used by the next `apply_filter`
    pub fn set_filter(&mut self, filter: impl Into<Filter>) {
        let filter = filter.into();
        log::debug!("Filter set: {}", filter);
        self.pending_filter = Some(filter);
    }

    /// Highlight the rows matching the filter set with `set_filter`.
    ///
    /// With no filter set, highlights are cleared.
    pub fn apply_filter(&mut self) {
        self.applied_filter = self.pending_filter.clone();
        match &self.applied_filter {
            Some(filter) => log::debug!("Applying filter: {}", filter),
            None => log::debug!("No filter set, clearing highlights"),
        }
        self.refresh();
    }

    /// Drop both the pending and the applied filter
    pub fn clear_filter(&mut self) {
        self.pending_filter = None;
        self.applied_filter = None;
        self.refresh();
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.store.as_slice()
    }

    pub fn snapshot(&self) -> Vec<Transaction> {
        self.store.snapshot()
    }

    /// Filter set with `set_filter`, applied or not
    pub fn filter(&self) -> Option<&Filter> {
        self.pending_filter.as_ref()
    }

    pub fn applied_filter(&self) -> Option<&Filter> {
        self.applied_filter.as_ref()
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    pub fn error_sink(&self) -> &E {
        &self.error_sink
    }

    pub fn error_sink_mut(&mut self) -> &mut E {
        &mut self.error_sink
    }

    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    /// Refresh on success, report on failure
    fn settle(&mut self, result: CoreResult<()>) -> bool {
        match result {
            Ok(()) => {
                self.refresh();
                true
            }
            Err(error) => {
                self.report(&error);
                false
            }
        }
    }

    fn report(&mut self, error: &CoreError) {
        let details = error.to_details();
        log::log!(
            error.severity().log_level(),
            "Rejected operation ({}): {}",
            error.severity(),
            details
        );
        self.error_sink.report_error(&details.to_string());
    }

    fn refresh(&mut self) {
        self.view = ViewState::compute(self.store.as_slice(), self.applied_filter.as_ref());
        self.publisher.publish(&self.view);
    }
}

impl<E, P> Default for Controller<E, P>
where
    E: ErrorSink + Default,
    P: ViewPublisher + Default,
{
    fn default() -> Self {
        Self::new(ValidationPolicy::default(), E::default(), P::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecordingErrorSink;
    use crate::filter::{AmountFilter, CategoryFilter};
    use crate::view::LatestView;
    use chrono::{TimeZone, Utc};

    type TestController = Controller<RecordingErrorSink, LatestView>;

    fn setup() -> TestController {
        TestController::default()
    }

    fn total_cost(controller: &TestController) -> f64 {
        controller.transactions().iter().map(|t| t.amount()).sum()
    }

    fn check_transaction(amount: f64, category: &str, transaction: &Transaction) {
        assert!((transaction.amount() - amount).abs() < 0.01);
        assert_eq!(transaction.category(), category);
        let age = Utc::now() - transaction.timestamp();
        assert!(age.num_milliseconds() < 60_000);
    }

    fn add_samples(controller: &mut TestController) {
        assert!(controller.add_transaction(50.0, "food"));
        assert!(controller.add_transaction(75.0, "travel"));
        assert!(controller.add_transaction(100.0, "entertainment"));
    }

    #[test]
    fn test_initial_view_published() {
        let controller = setup();
        assert_eq!(controller.publisher().publish_count(), 1);
        assert_eq!(controller.view().row_count(), 1);
        assert!(controller.transactions().is_empty());
    }

    #[test]
    fn test_add_transaction() {
        let mut controller = setup();
        assert_eq!(controller.transactions().len(), 0);

        assert!(controller.add_transaction(50.0, "food"));

        assert_eq!(controller.transactions().len(), 1);
        check_transaction(50.0, "food", &controller.transactions()[0]);
        assert!((total_cost(&controller) - 50.0).abs() < 0.01);
        assert!(!controller.error_sink().is_error_reported());
    }

    #[test]
    fn test_add_transaction_updates_view() {
        let mut controller = setup();
        let initial_rows = controller.view().rows.len();

        controller.add_transaction(50.0, "food");

        let view = controller.view();
        assert_eq!(view.row_count(), 2);
        assert_eq!(view.rows.len(), initial_rows + 1);
        assert!((view.rows[initial_rows].amount - 50.0).abs() < 0.01);
        assert_eq!(view.rows[initial_rows].category, "food");
        assert!((view.total - 50.0).abs() < 0.01);
        assert_eq!(controller.publisher().latest(), Some(view));
    }

    #[test]
    fn test_add_transaction_with_invalid_input() {
        let mut controller = setup();
        let initial_rows = controller.view().row_count();
        let initial_total = total_cost(&controller);
        let initial_publishes = controller.publisher().publish_count();

        assert!(!controller.add_transaction(1500.0, ""));

        assert_eq!(controller.transactions().len(), 0);
        assert_eq!(controller.view().row_count(), initial_rows);
        assert!((total_cost(&controller) - initial_total).abs() < 0.01);
        assert_eq!(controller.error_sink().error_count(), 1);
        assert_eq!(controller.publisher().publish_count(), initial_publishes);
    }

    #[test]
    fn test_reported_message_carries_code_and_suggestions() {
        let mut controller = setup();
        assert!(!controller.add_transaction(1500.0, "food"));
        assert!(!controller.undo_transaction(0));

        let messages = controller.error_sink().messages();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].starts_with("[INVALID_AMOUNT]"));
        assert!(messages[0].contains("no more than 1000"));
        assert!(messages[1].starts_with("[INDEX_OUT_OF_RANGE]"));
        assert!(messages[1].contains("There are no transactions to undo."));
    }

    #[test]
    fn test_each_invalid_input_reported_once() {
        let mut controller = setup();
        assert!(!controller.add_transaction(0.0, "food"));
        assert!(!controller.add_transaction(-10.0, "food"));
        assert!(!controller.add_transaction(50.0, ""));
        assert!(!controller.add_transaction(50.0, "   "));

        assert_eq!(controller.error_sink().error_count(), 4);
        assert!(controller.transactions().is_empty());
        assert!(controller.error_sink().messages()[2].contains("category"));
    }

    #[test]
    fn test_total_matches_sum() {
        let mut controller = setup();
        add_samples(&mut controller);
        assert!((controller.view().total - 225.0).abs() < 0.01);
        assert!((total_cost(&controller) - 225.0).abs() < 0.01);
    }

    #[test]
    fn test_remove_transaction() {
        let mut controller = setup();
        controller.add_transaction(50.0, "food");
        let added = controller.transactions()[0].clone();

        assert!(controller.remove_transaction(&added));

        assert!(controller.transactions().is_empty());
        assert!(total_cost(&controller).abs() < 0.01);
        assert_eq!(controller.view().row_count(), 1);
    }

    #[test]
    fn test_remove_absent_transaction_is_silent() {
        let mut controller = setup();
        controller.add_transaction(50.0, "food");
        let publishes = controller.publisher().publish_count();

        let recorded_at = Utc.with_ymd_and_hms(2020, 1, 1, 12, 0, 0).unwrap();
        let absent = Transaction::with_timestamp(50.0, "food", recorded_at);
        assert!(!controller.remove_transaction(&absent));

        assert_eq!(controller.transactions().len(), 1);
        assert!(!controller.error_sink().is_error_reported());
        assert_eq!(controller.publisher().publish_count(), publishes);
    }

    #[test]
    fn test_undo_disallowed_when_empty() {
        let mut controller = setup();
        assert!(controller.transactions().is_empty());

        assert!(!controller.undo_transaction(0));

        assert!(controller.transactions().is_empty());
        assert_eq!(controller.view().row_count(), 1);
        assert_eq!(controller.error_sink().error_count(), 1);
    }

    #[test]
    fn test_undo_allowed() {
        let mut controller = setup();
        controller.add_transaction(50.0, "food");
        assert_eq!(controller.view().row_count(), 2);

        assert!(controller.undo_transaction(0));

        assert_eq!(controller.transactions().len(), 0);
        assert_eq!(controller.view().row_count(), 1);
        assert!(!controller.error_sink().is_error_reported());
    }

    #[test]
    fn test_undo_out_of_range_keeps_state() {
        let mut controller = setup();
        add_samples(&mut controller);
        let before = controller.snapshot();

        assert!(!controller.undo_transaction(3));

        assert_eq!(controller.snapshot(), before);
        assert_eq!(controller.error_sink().error_count(), 1);
    }

    #[test]
    fn test_undo_most_recent() {
        let mut controller = setup();
        add_samples(&mut controller);

        let last = controller.transactions().len() - 1;
        assert!(controller.undo_transaction(last));

        let categories: Vec<&str> = controller.transactions().iter().map(|t| t.category()).collect();
        assert_eq!(categories, vec!["food", "travel"]);
    }

    #[test]
    fn test_filter_by_amount() {
        let mut controller = setup();
        add_samples(&mut controller);

        controller.set_filter(AmountFilter::new(75.0));
        controller.apply_filter();

        let highlighted = &controller.view().highlighted;
        assert_eq!(highlighted.len(), 1);
        let tx = &controller.transactions()[highlighted[0]];
        assert!((tx.amount() - 75.0).abs() < 0.01);
    }

    #[test]
    fn test_filter_by_category() {
        let mut controller = setup();
        add_samples(&mut controller);

        controller.set_filter(CategoryFilter::new("food"));
        controller.apply_filter();

        let highlighted = &controller.view().highlighted;
        assert_eq!(highlighted.len(), 1);
        assert_eq!(controller.transactions()[highlighted[0]].category(), "food");
    }

    #[test]
    fn test_apply_filter_is_idempotent() {
        let mut controller = setup();
        add_samples(&mut controller);
        controller.set_filter(CategoryFilter::new("travel"));

        controller.apply_filter();
        let first = controller.view().highlighted.clone();
        controller.apply_filter();

        assert_eq!(controller.view().highlighted, first);
    }

    #[test]
    fn test_set_filter_waits_for_apply() {
        let mut controller = setup();
        add_samples(&mut controller);

        controller.set_filter(CategoryFilter::new("food"));
        assert!(controller.view().highlighted.is_empty());
        assert!(controller.filter().is_some());
        assert!(controller.applied_filter().is_none());
    }

    #[test]
    fn test_apply_without_filter_clears_highlights() {
        let mut controller = setup();
        add_samples(&mut controller);
        controller.apply_filter();
        assert!(controller.view().highlighted.is_empty());

        controller.set_filter(AmountFilter::new(50.0));
        controller.apply_filter();
        assert_eq!(controller.view().highlighted, vec![0]);

        controller.clear_filter();
        assert!(controller.view().highlighted.is_empty());
        assert!(controller.filter().is_none());
    }

    #[test]
    fn test_highlights_follow_mutations() {
        let mut controller = setup();
        add_samples(&mut controller);
        controller.set_filter(CategoryFilter::new("entertainment"));
        controller.apply_filter();
        assert_eq!(controller.view().highlighted, vec![2]);

        assert!(controller.undo_transaction(0));
        assert_eq!(controller.view().highlighted, vec![1]);

        assert!(controller.add_transaction(20.0, "entertainment"));
        assert_eq!(controller.view().highlighted, vec![1, 2]);
    }

    #[test]
    fn test_allowed_categories_policy() {
        let policy = ValidationPolicy::default().with_allowed_categories(["food", "travel"]);
        let mut controller = Controller::new(policy, RecordingErrorSink::default(), LatestView::default());

        assert!(controller.add_transaction(10.0, "food"));
        assert!(!controller.add_transaction(10.0, "groceries"));
        assert_eq!(controller.transactions().len(), 1);
        assert_eq!(controller.error_sink().error_count(), 1);
    }
}
