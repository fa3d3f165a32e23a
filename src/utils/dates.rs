//! Period string utilities
//!
//! Periods in the profile and project data are free text such as
//! `2023.3-Present`, `2011.8-2011.12`, `2025.05 - 2025.12` or `2015`.
//! Only the digit tokens matter; anything else in the string is ignored.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Marker for an open-ended period (matched case-insensitively)
const PRESENT: &str = "present";

/// `YYYY.M` / `YYYY.MM`
static YEAR_MONTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{4})\.([0-9]{1,2})").expect("year.month pattern"));

static YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]{4}").expect("year pattern"));

/// A year directly followed by a dot, as in `2021.01`
static DOTTED_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{4})\.").expect("dotted year pattern"));

/// Normalize a free-text period into the two-line form shown in the date
/// column of the timeline.
///
/// # Examples
/// ```
/// use cvgen::utils::parse_date_range;
///
/// assert_eq!(parse_date_range("2023.3-Present"), "2023.03 -\nPresent");
/// assert_eq!(parse_date_range("2011.8-2011.12"), "2011.08 -\n2011.12");
/// assert_eq!(parse_date_range("2019.9"), "2019.09");
/// assert_eq!(parse_date_range("2015 - 2018"), "2015 -\n2018");
/// assert_eq!(parse_date_range("  Spring term "), "Spring term");
/// ```
pub fn parse_date_range(period: &str) -> String {
    let period = period.trim();
    let is_present = period.to_lowercase().contains(PRESENT);

    let months = year_month_tokens(period);
    if let Some(&(start_year, start_month)) = months.first() {
        let start = format!("{}.{:02}", start_year, start_month);
        return if is_present {
            format!("{} -\nPresent", start)
        } else if let Some(&(end_year, end_month)) = months.get(1) {
            format!("{} -\n{}.{:02}", start, end_year, end_month)
        } else {
            start
        };
    }

    let years = year_tokens(period);
    match years.as_slice() {
        [] => period.to_string(),
        [first, ..] if is_present => format!("{} -\nPresent", first),
        [first, second, ..] => format!("{} -\n{}", first, second),
        [only] => only.to_string(),
    }
}

/// First bare 4-digit year in the string
///
/// # Examples
/// ```
/// use cvgen::utils::first_year;
///
/// assert_eq!(first_year("2008.3 - 2013.2"), Some(2008));
/// assert_eq!(first_year("Feb. 2019"), Some(2019));
/// assert_eq!(first_year("n/a"), None);
/// ```
pub fn first_year(s: &str) -> Option<i32> {
    YEAR.find(s).and_then(|m| m.as_str().parse().ok())
}

/// Compact a project period: `2021.01 - 2023.12` becomes `21.01 ~ 23.12`.
///
/// Every 4-digit year directly followed by `.` loses its century digits;
/// ` - ` separators become ` ~ `.
pub fn shorten_period(period: &str) -> String {
    DOTTED_YEAR
        .replace_all(period, |caps: &Captures| format!("{}.", &caps[1][2..]))
        .replace(" - ", " ~ ")
}

/// Non-overlapping `(year, month)` tokens, left to right
fn year_month_tokens(s: &str) -> Vec<(&str, u32)> {
    YEAR_MONTH
        .captures_iter(s)
        .filter_map(|caps| {
            let year = caps.get(1)?.as_str();
            let month = caps.get(2)?.as_str().parse().ok()?;
            Some((year, month))
        })
        .collect()
}

/// Non-overlapping 4-digit tokens, left to right
fn year_tokens(s: &str) -> Vec<&str> {
    YEAR.find_iter(s).map(|m| m.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_range_present() {
        assert_eq!(parse_date_range("2023.3-Present"), "2023.03 -\nPresent");
        assert_eq!(parse_date_range("2023.03 - present"), "2023.03 -\nPresent");
        assert_eq!(parse_date_range("2023.3-PRESENT"), "2023.03 -\nPresent");
    }

    #[test]
    fn test_month_range_closed() {
        assert_eq!(parse_date_range("2011.8-2011.12"), "2011.08 -\n2011.12");
        assert_eq!(parse_date_range("2025.05 - 2025.12"), "2025.05 -\n2025.12");
    }

    #[test]
    fn test_single_month() {
        assert_eq!(parse_date_range("2019.9"), "2019.09");
        assert_eq!(parse_date_range(" 2019.10 "), "2019.10");
    }

    #[test]
    fn test_present_wins_over_second_token() {
        assert_eq!(parse_date_range("2020.1-2021.2, present"), "2020.01 -\nPresent");
    }

    #[test]
    fn test_bare_years() {
        assert_eq!(parse_date_range("2015-Present"), "2015 -\nPresent");
        assert_eq!(parse_date_range("2015 - 2018"), "2015 -\n2018");
        assert_eq!(parse_date_range("2015"), "2015");
    }

    #[test]
    fn test_no_match_returns_trimmed_input() {
        assert_eq!(parse_date_range("  Spring term "), "Spring term");
        assert_eq!(parse_date_range(""), "");
        assert_eq!(parse_date_range("Present"), "Present");
    }

    #[test]
    fn test_month_token_needs_digit_after_dot() {
        // "2019." has no month, so the year fallback applies
        assert_eq!(parse_date_range("2019. - 2020."), "2019 -\n2020");
    }

    #[test]
    fn test_first_year() {
        assert_eq!(first_year("2008.3 - 2013.2"), Some(2008));
        assert_eq!(first_year("Ph.D. 2014"), Some(2014));
        assert_eq!(first_year("no year"), None);
        assert_eq!(first_year("123"), None);
    }

    #[test]
    fn test_shorten_period() {
        assert_eq!(shorten_period("2021.01 - 2023.12"), "21.01 ~ 23.12");
        assert_eq!(shorten_period("2024.03-2026.02"), "24.03-26.02");
        assert_eq!(shorten_period("2020 - 2022"), "2020 ~ 2022");
        assert_eq!(shorten_period(""), "");
    }

    #[test]
    fn test_tokens_borrow_from_input() {
        let period = String::from("2011.8-2011.12 and 2015");
        assert_eq!(year_month_tokens(&period), vec![("2011", 8), ("2011", 12)]);
        assert_eq!(year_tokens(&period), vec!["2011", "2011", "2015"]);
        assert_eq!(year_tokens("12345678"), vec!["1234", "5678"]);
    }

    #[test]
    fn test_unicode_input_does_not_panic() {
        assert_eq!(parse_date_range("2023.3 – 현재"), "2023.03");
        assert_eq!(shorten_period("2021.01 ~ 현재"), "21.01 ~ 현재");
    }
}
