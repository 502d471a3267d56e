//! Formatting utilities used for CLI outputs.

/// Two-decimal dollar amount, e.g. `$67.50` or `-$5.00`.
pub fn money(amount: f64) -> String {
    // -0.0 would print as "$-0.00"
    let amount = if amount == 0.0 { 0.0 } else { amount };
    if amount < 0.0 {
        format!("-${:.2}", amount.abs())
    } else {
        format!("${:.2}", amount)
    }
}

/// Hours with two decimals, or "--" when not computable.
pub fn hours(value: Option<f64>) -> String {
    match value {
        Some(h) => format!("{:.2}h", h),
        None => "--".to_string(),
    }
}

/// Stored rate as shown on the roster: `$15/hr`.
pub fn rate_per_hour(rate: &str) -> String {
    format!("${}/hr", rate)
}

/// Blank values are shown as "--".
pub fn or_placeholder(value: &str) -> String {
    if value.trim().is_empty() {
        "--".to_string()
    } else {
        value.to_string()
    }
}
