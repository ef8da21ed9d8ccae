//! Calendar interpretation of the free-form date columns.
//!
//! Files in the wild spell dates as `2024/01/14`, `1965.09.07`, `24/01/04`
//! or `28. 07. 2005`. The codec keeps the raw text; these helpers only read it.

use chrono::NaiveDate;

fn normalize_date_separators(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == '.' || c == '-' { '/' } else { c })
        .collect()
}

/// Parses a date column, returning `None` for partial or unknown dates.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let norm = normalize_date_separators(raw);
    let parts: Vec<&str> = norm.split('/').collect();
    if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
        return None;
    }
    if !parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit())) {
        return None;
    }

    let (year, month, day) = match (parts[0].len(), parts[2].len()) {
        (4, _) => (parts[0].parse().ok()?, parts[1], parts[2]),
        (_, 4) => (parts[2].parse().ok()?, parts[1], parts[0]),
        (2, 2) => (2000 + parts[0].parse::<i32>().ok()?, parts[1], parts[2]),
        _ => return None,
    };

    NaiveDate::from_ymd_opt(year, month.parse().ok()?, day.parse().ok()?)
}
