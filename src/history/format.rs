/// Display formatting for transfer amounts
use super::types::Direction;

/// Smallest absolute change reported as an event
pub const DUST_THRESHOLD: f64 = 0.00001;

/// Inclusive: a change of exactly the threshold is reported
pub fn exceeds_dust(delta: f64) -> bool {
    delta.abs() >= DUST_THRESHOLD
}

/// Abbreviate token quantities: 1.50M, 2.50K, 42.10
///
/// Display only; the event keeps the exact amount.
pub fn format_token_amount(amount: f64) -> String {
    if amount >= 1e6 {
        format!("{:.2}M", amount / 1e6)
    } else if amount >= 1e3 {
        format!("{:.2}K", amount / 1e3)
    } else {
        format!("{:.2}", amount)
    }
}

/// Native amounts always carry four decimals
pub fn format_native_amount(amount: f64) -> String {
    format!("{:.4}", amount)
}

/// `+1.0000 SOL`, `-2.50K DORITO`
pub fn signed_display(direction: Direction, magnitude: &str, symbol: &str) -> String {
    format!("{}{} {}", direction.sign(), magnitude, symbol)
}
