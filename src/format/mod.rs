//! Locale formatting for display values.
//!
//! The dashboard is served in Italian, so every formatter here is fixed to the
//! it-IT conventions: `.` for thousands grouping, `,` for decimals, `d/m/Y`
//! dates with no zero padding.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Currency code applied when an element carries none.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Marker rendered for dates that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

static CURRENCY_SYMBOLS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("EUR", "€"),
        ("USD", "$"),
        ("GBP", "£"),
        ("CHF", "CHF"),
        ("JPY", "¥"),
    ])
});

/// Format a monetary amount: grouped integer part, two decimals, currency
/// symbol appended (`1.234,50 €`). Codes without a known symbol render the ISO
/// code itself. The input is not validated; non-finite values render however
/// the underlying float formatting does.
pub fn format_currency(value: f64, currency: &str) -> String {
    let symbol = CURRENCY_SYMBOLS.get(currency).copied().unwrap_or(currency);
    format!("{} {}", format_grouped(value, 2), symbol)
}

/// Format a percentage given in whole-number form (12.34 means 12.34%) with
/// exactly two decimal digits: `12,34%`.
pub fn format_percentage(value: f64) -> String {
    // The fractional-percentage renderer scales back up by 100.
    let fraction = value / 100.0;
    format!("{}%", format_grouped(fraction * 100.0, 2))
}

/// Format a date string in it-IT short form (`14/3/2023`). Unparseable input
/// renders the fixed [`INVALID_DATE`] marker; no error is raised.
pub fn format_date(input: &str) -> String {
    match parse_date(input.trim()) {
        Some(date) => date.format("%-d/%-m/%Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%d/%m/%Y") {
        return Some(date);
    }
    None
}

/// Format a number it-IT style with a fixed number of decimal places:
/// `.` thousands separators and a `,` decimal separator.
pub fn format_grouped(value: f64, decimals: u32) -> String {
    let negative = value < 0.0;
    let abs_value = value.abs();

    // Add half an ULP at the target precision before rounding to avoid
    // IEEE 754 midpoint artifacts.
    let factor = 10_f64.powi(decimals as i32);
    let epsilon = f64::EPSILON * abs_value * factor;
    let rounded = ((abs_value * factor) + epsilon).round() / factor;

    let integer_part = rounded.trunc() as u64;
    let grouped = group_thousands(&integer_part.to_string());

    let result = if decimals == 0 {
        grouped
    } else {
        let frac_str = format!("{:.prec$}", rounded - rounded.trunc(), prec = decimals as usize);
        // frac_str is "0.50"; keep only the digits after the point.
        format!("{},{}", grouped, &frac_str[2..])
    };

    if negative {
        format!("-{}", result)
    } else {
        result
    }
}

fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(*b as char);
    }
    out
}
