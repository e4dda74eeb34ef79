//! Currency and percentage text

use rust_decimal::{Decimal, RoundingStrategy};

/// Amount as shown on the board: "1,000,000", "0.01", "12,345.5"
pub fn format_grid_value(amount: Decimal) -> String {
    let min_fraction = if amount < Decimal::ONE { 2 } else { 0 };
    format_number(amount, min_fraction, 2)
}

/// Amount as US dollars: "$1,000,000", "$0.01"
pub fn format_currency(amount: Decimal) -> String {
    format!("${}", format_grid_value(amount))
}

/// Engine output as US dollars
pub fn format_offer(offer: f64) -> String {
    format_currency(Decimal::try_from(offer).unwrap_or(Decimal::ZERO))
}

/// Fraction as a percentage: 0.2 -> "20.00%", 1.5 -> "150%"
pub fn format_percentage(fraction: f64) -> String {
    let min_fraction = if fraction < 1.0 { 2 } else { 0 };
    let percent = Decimal::try_from(fraction * 100.0).unwrap_or(Decimal::ZERO);
    format!("{}%", format_number(percent, min_fraction, 2))
}

fn format_number(value: Decimal, min_fraction: usize, max_fraction: u32) -> String {
    let rounded = value
        .round_dp_with_strategy(max_fraction, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let text = rounded.abs().to_string();

    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part.to_string()),
        None => (text.as_str(), String::new()),
    };
    let mut frac = frac_part;
    while frac.len() < min_fraction {
        frac.push('0');
    }

    let mut out = String::new();
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(&frac);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
