//! Utility functions and helpers

/// Format a number with thousands separators
pub fn format_number<T: ToString>(n: T) -> String {
    let s = n.to_string();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s.as_str()),
    };
    let mut result = String::new();
    let mut count = 0;
    for c in digits.chars().rev() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(c);
        count += 1;
    }
    let grouped: String = result.chars().rev().collect();
    format!("{}{}", sign, grouped)
}

/// Format an amount with two decimal places and thousands separators
pub fn format_amount(amount: f64) -> String {
    let digits = format!("{:.2}", amount.abs());
    let Some((whole, fraction)) = digits.split_once('.') else {
        // NaN and infinities have no fractional part to group
        return format!("{:.2}", amount);
    };
    let sign = if amount < 0.0 && digits != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, format_number(whole), fraction)
}

/// Pad `text` on the left to `width` characters
pub fn pad_left(text: &str, width: usize) -> String {
    format!("{:>width$}", text, width = width)
}

// ==================== Tests ====================
