//! Formatting helpers for presenting statistics.

use time::{macros::format_description, Date, Month};

use crate::stats::model::Metric;
use crate::t;

/// Group thousands with a plain space: `1234567` → `1 234 567`.
pub fn format_number(value: u64) -> String {
    group_digits(&value.to_string())
}

/// Signed variant of [`format_number`].
pub fn format_int(value: i64) -> String {
    let grouped = group_digits(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

/// Ranked values: whole numbers are grouped, fractions keep one decimal,
/// pre-formatted text passes through untouched.
pub fn format_metric(metric: &Metric) -> String {
    match metric {
        Metric::Int(value) => format_int(*value),
        Metric::Float(value) if value.is_finite() && value.fract() == 0.0 => {
            format_int(*value as i64)
        }
        Metric::Float(value) => format!("{value:.1}"),
        Metric::Text(text) => text.clone(),
    }
}

/// Plain decimal without grouping (`12.5`, `40`).
pub fn format_decimal(value: f64) -> String {
    format!("{value}")
}

/// `2024-03-08T12:00:00` → `8 мар.`; `None` when the date part can't be parsed.
pub fn format_date(iso: &str) -> Option<String> {
    let date_part = iso.get(..10)?;
    let date = Date::parse(date_part, &format_description!("[year]-[month]-[day]")).ok()?;
    Some(format!("{} {}", date.day(), month_short(date.month())))
}

fn month_short(month: Month) -> String {
    match month {
        Month::January => t!("month-jan"),
        Month::February => t!("month-feb"),
        Month::March => t!("month-mar"),
        Month::April => t!("month-apr"),
        Month::May => t!("month-may"),
        Month::June => t!("month-jun"),
        Month::July => t!("month-jul"),
        Month::August => t!("month-aug"),
        Month::September => t!("month-sep"),
        Month::October => t!("month-oct"),
        Month::November => t!("month-nov"),
        Month::December => t!("month-dec"),
    }
}

/// Seconds → `42 мин` or `3 ч 5 мин` (whole minutes, rounded down).
pub fn format_duration(seconds: f64) -> String {
    let minutes = if seconds.is_finite() && seconds > 0.0 {
        (seconds / 60.0).floor() as u64
    } else {
        0
    };
    if minutes < 60 {
        return t!("duration-minutes", minutes = minutes.to_string());
    }
    t!(
        "duration-hours",
        hours = (minutes / 60).to_string(),
        minutes = (minutes % 60).to_string()
    )
}
