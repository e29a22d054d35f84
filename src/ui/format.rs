//! Value formatting for the dashboard panels. Every formatter takes an
//! optional value and renders the dashed placeholder until real data
//! arrives, so the empty state needs no special casing in the panels.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// "$--" when absent, otherwise "$" followed by two decimals.
pub fn format_currency(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("${:.2}", v),
        None => "$--".to_string(),
    }
}

/// "--%" when absent, otherwise the fraction scaled to percent and
/// rounded to the nearest whole number.
pub fn format_percentage(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}%", (v * 100.0).round() as i64),
        None => "--%".to_string(),
    }
}

/// Bare two-decimal price, "--" when absent. Ties go to the even digit
/// (the formatter's default), so a mid of exactly 0.125 renders "0.12".
pub fn format_price(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "--".to_string(),
    }
}

/// "--" when absent, otherwise the plain integer.
pub fn format_count(value: Option<u64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "--".to_string(),
    }
}

/// Read an ISO-8601-like wall clock string into local time. RFC 3339
/// strings are honored with their offset; naive strings are taken as
/// local time, which matches a feed running on the same host.
pub fn parse_timestamp(ts: &str) -> Option<DateTime<Local>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return Some(dt.with_timezone(&Local));
    }
    NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .and_then(|naive| Local.from_local_datetime(&naive).single())
}

/// "HH:MM:SS" from a tick timestamp, "--:--:--" if it does not parse.
pub fn clock_label(ts: &str) -> String {
    parse_timestamp(ts)
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "--:--:--".to_string())
}

/// "YYYY-MM-DD" from a tick timestamp, "--" if it does not parse.
pub fn date_label(ts: &str) -> String {
    parse_timestamp(ts)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "--".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_placeholder_and_value() {
        assert_eq!(format_currency(None), "$--");
        assert_eq!(format_currency(Some(12.301)), "$12.30");
        assert_eq!(format_currency(Some(0.0)), "$0.00");
        assert_eq!(format_currency(Some(-3.456)), "$-3.46");
    }

    #[test]
    fn percentage_placeholder_and_rounding() {
        assert_eq!(format_percentage(None), "--%");
        assert_eq!(format_percentage(Some(0.873)), "87%");
        assert_eq!(format_percentage(Some(0.8750)), "88%");
        assert_eq!(format_percentage(Some(1.0)), "100%");
        assert_eq!(format_percentage(Some(0.0)), "0%");
    }

    #[test]
    fn price_rounds_ties_to_even() {
        // (1.001 + 1.002) / 2 sits just under 1.0015 in binary
        assert_eq!(format_price(Some((1.001 + 1.002) / 2.0)), "1.00");
        assert_eq!(format_price(Some(0.125)), "0.12");
        assert_eq!(format_price(Some(0.135)), "0.14");
        assert_eq!(format_price(None), "--");
    }

    #[test]
    fn count_placeholder_and_value() {
        assert_eq!(format_count(None), "--");
        assert_eq!(format_count(Some(42)), "42");
    }

    #[test]
    fn timestamp_parses_rfc3339_and_naive() {
        assert!(parse_timestamp("2024-05-02T09:30:00+00:00").is_some());
        assert!(parse_timestamp("2024-05-02T09:30:00.123456").is_some());
        assert!(parse_timestamp("2024-05-02T09:30:00").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn clock_label_falls_back_on_garbage() {
        assert_eq!(clock_label("not a time"), "--:--:--");
        assert_eq!(clock_label("2024-05-02T09:30:05"), "09:30:05");
    }

    #[test]
    fn date_label_falls_back_on_garbage() {
        assert_eq!(date_label("not a date"), "--");
        assert_eq!(date_label("2024-05-02T09:30:05"), "2024-05-02");
    }
}
