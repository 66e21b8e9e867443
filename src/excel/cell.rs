//! Cell value → display text

use calamine::{Data, ExcelDateTime};
use chrono::Timelike;
use std::borrow::Cow;

/// Render a cell's cached value the way a spreadsheet displays it.
pub fn render_cell(cell: &Data) -> Cow<'_, str> {
    match cell {
        Data::Empty => Cow::Borrowed(""),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => Cow::Borrowed(s),
        Data::Int(i) => Cow::Owned(i.to_string()),
        Data::Float(f) => Cow::Owned(format_number(*f)),
        Data::Bool(true) => Cow::Borrowed("TRUE"),
        Data::Bool(false) => Cow::Borrowed("FALSE"),
        Data::Error(e) => Cow::Owned(e.to_string()),
        Data::DateTime(dt) => Cow::Owned(render_datetime(dt)),
    }
}

/// Shortest round-trip digits; magnitudes from 1e15 up or below 1e-4 switch
/// to exponent form with a signed, at least two-digit exponent (`1E+21`,
/// `1.5E-07`).
fn format_number(n: f64) -> String {
    let magnitude = n.abs();
    if n == 0.0 || !n.is_finite() || (1e-4..1e15).contains(&magnitude) {
        return n.to_string();
    }

    let formatted = format!("{:E}", n);
    match formatted.split_once('E') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}E{}{:0>2}", mantissa, sign, digits)
        }
        None => formatted,
    }
}

/// Dates at midnight print as `YYYY-MM-DD`, other instants add `HH:MM:SS`.
/// Durations and out-of-range serials fall back to the serial number.
fn render_datetime(dt: &ExcelDateTime) -> String {
    if dt.is_duration() {
        return format_number(dt.as_f64());
    }
    match dt.as_datetime() {
        Some(value) if value.num_seconds_from_midnight() == 0 => {
            value.format("%Y-%m-%d").to_string()
        }
        Some(value) => value.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => format_number(dt.as_f64()),
    }
}
