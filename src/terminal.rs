//! Terminal display and error reporting

use expense_core::{ErrorSink, ViewPublisher, ViewState};
use expense_utils::{format_amount, pad_left};

/// Prints every published view to stdout
pub struct TerminalView {
    json: bool,
}

impl TerminalView {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn render(&self, view: &ViewState) -> String {
        if self.json {
            return serde_json::to_string_pretty(view).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e));
        }

        let mut out = String::new();
        out.push_str(&format!("  {:>3}  {:>12}  {:<20}  {}\n", "#", "Amount", "Category", "Date"));
        for (i, row) in view.rows.iter().enumerate() {
            let marker = if view.is_highlighted(i) { '*' } else { ' ' };
            out.push_str(&format!(
                "{} {:>3}  {}  {:<20}  {}\n",
                marker,
                row.serial,
                pad_left(&format_amount(row.amount), 12),
                row.category,
                row.timestamp
            ));
        }
        out.push_str(&format!("{:<7}{}\n", " Total", pad_left(&view.formatted_total(), 12)));
        out
    }
}

impl ViewPublisher for TerminalView {
    fn publish(&mut self, view: &ViewState) {
        print!("{}", self.render(view));
    }
}

/// Prints errors to stderr
#[derive(Default)]
pub struct ConsoleErrorSink;

impl ErrorSink for ConsoleErrorSink {
    fn report_error(&mut self, message: &str) {
        eprintln!("error: {}", message);
    }
}

// ==================== Tests ====================
