//! Type-coercing parsers with defaults.
//!
//! Every function here turns loose string input into a typed value without
//! panicking: invalid input falls back to a caller-supplied default (or the
//! type's default). Useful at the edges where values arrive as text, such
//! as query strings and marker pairs.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::str::FromStr;

/// Parse `value` as `T`, falling back to `T::default()` on failure.
///
/// ```
/// assert_eq!(velarium::coerce::parse::<i32>("wrong"), 0);
/// assert_eq!(velarium::coerce::parse::<i32>("15"), 15);
/// ```
pub fn parse<T: FromStr + Default>(value: &str) -> T {
    parse_or(value, T::default())
}

/// Parse `value` as `T`, falling back to `default` on failure.
pub fn parse_or<T: FromStr>(value: &str, default: T) -> T {
    value.parse().unwrap_or(default)
}

/// Parse a boolean, treating `1`, `1.0`, `yes`, `on`, and `active` as true.
pub fn parse_bool(value: &str) -> bool {
    parse_bool_or(value, false)
}

/// Parse a boolean with an explicit fallback.
///
/// `true`/`false` match in any case; the truthy forms `1`, `1.0`, `yes`,
/// `on`, and `active` also count as true. Anything else is the default.
pub fn parse_bool_or(value: &str, default: bool) -> bool {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "active" | "1" | "1.0" => true,
        "false" => false,
        _ => default,
    }
}

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parse a datetime from `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS`, or a
/// bare `YYYY-MM-DD` (midnight).
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Some(datetime);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok().map(|date| date.and_time(NaiveTime::MIN))
}

/// Parse a datetime with an explicit fallback.
pub fn parse_datetime_or(value: &str, default: NaiveDateTime) -> NaiveDateTime {
    parse_datetime(value).unwrap_or(default)
}

/// Default-fill an empty `value`, then truncate to `max` characters
/// (`max == 0` means unlimited).
pub fn parse_max_string(value: &str, default: &str, max: usize) -> String {
    let chosen = if value.is_empty() && !default.is_empty() { default } else { value };
    if max > 0 && chosen.chars().count() > max {
        return chosen.chars().take(max).collect();
    }
    chosen.to_string()
}
