//! Utilities for date and time formatting
//!
//! Timestamps carrying a zone (`Z` or `+02:00`) are shown in the browser's
//! local time. Naive timestamps are shown as the backend sent them.

use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;

/// Format ISO datetime string to DD.MM.YYYY HH:MM:SS format in local time
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.2024 15:02:26" in Berlin
pub fn format_datetime(datetime_str: &str) -> String {
    format_datetime_in(datetime_str, &Local)
}

/// Format ISO datetime string to HH:MM in local time
/// Example: "2024-03-15T14:02:26.123Z" -> "15:02" in Berlin
pub fn format_time(datetime_str: &str) -> String {
    format_time_in(datetime_str, &Local)
}

fn format_datetime_in<Tz: TimeZone>(datetime_str: &str, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    if let Some(local) = parse_zoned(datetime_str, tz) {
        return local.format("%d.%m.%Y %H:%M:%S").to_string();
    }
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        if let Some((year, rest)) = date_part.split_once('-') {
            if let Some((month, day)) = rest.split_once('-') {
                let time = strip_fraction_and_zone(time_part);
                return format!("{}.{}.{} {}", day, month, year, time);
            }
        }
    }
    datetime_str.to_string()
}

fn format_time_in<Tz: TimeZone>(datetime_str: &str, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    if let Some(local) = parse_zoned(datetime_str, tz) {
        return local.format("%H:%M").to_string();
    }
    if let Some((_, time_part)) = datetime_str.split_once('T') {
        let time = strip_fraction_and_zone(time_part);
        let mut parts = time.split(':');
        if let (Some(h), Some(m)) = (parts.next(), parts.next()) {
            return format!("{}:{}", h, m);
        }
    }
    datetime_str.to_string()
}

fn parse_zoned<Tz: TimeZone>(datetime_str: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    DateTime::parse_from_rfc3339(datetime_str)
        .ok()
        .map(|dt| dt.with_timezone(tz))
}

fn strip_fraction_and_zone(time_part: &str) -> &str {
    let end = time_part
        .find(|c: char| c == '.' || c == 'Z' || c == '+' || c == '-')
        .unwrap_or(time_part.len());
    &time_part[..end]
}
