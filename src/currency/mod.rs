//! Fixed-format money rendering used by the list rows and the running total.

const CURRENCY_SYMBOL: &str = "$";

/// Formats an amount as `$` followed by the value rounded to two decimals.
/// Negative values keep their sign after the symbol (`$-10.00`).
pub fn format_currency(amount: f64) -> String {
    // Avoid rendering `$-0.00` for tiny negatives that round to zero.
    let rounded = (amount * 100.0).round() / 100.0;
    let value = if rounded == 0.0 { 0.0 } else { amount };
    format!("{CURRENCY_SYMBOL}{value:.2}")
}
