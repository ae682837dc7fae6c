//! Display order of news entries
//!
//! Pinned entries come first, then newer dates. Dates are compared as the
//! integer left after removing every `.`; this only orders correctly for
//! fixed-width `YYYY.MM.DD` values, which is what the site publishes.

use std::cmp::Ordering;

use super::models::NewsEntry;

/// Numeric sort key of a dotted date. Missing or unparseable dates are 0.
///
/// Only plain decimal digits are read, so exponent or hex forms such as
/// `1e3` and `0x10` are unparseable here.
///
/// ```
/// use site_news::news::ordering::date_key;
///
/// assert_eq!(date_key(Some("2024.03.10")), 20240310);
/// assert_eq!(date_key(Some("abc")), 0);
/// assert_eq!(date_key(Some("1e3")), 0);
/// assert_eq!(date_key(None), 0);
/// ```
pub fn date_key(date: Option<&str>) -> i64 {
    let Some(date) = date else {
        return 0;
    };
    let digits: String = date.chars().filter(|c| *c != '.').collect();
    digits.trim().parse::<i64>().unwrap_or(0)
}

fn compare(a: &NewsEntry, b: &NewsEntry) -> Ordering {
    b.is_pinned()
        .cmp(&a.is_pinned())
        .then_with(|| date_key(b.date.as_deref()).cmp(&date_key(a.date.as_deref())))
}

/// Returns the entries in display order without touching the input.
///
/// The sort is stable: entries with equal pinned state and date key keep
/// their relative input order.
pub fn order(entries: &[NewsEntry]) -> Vec<NewsEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(compare);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(slug: &str, date: Option<&str>, pinned: Option<bool>) -> NewsEntry {
        NewsEntry {
            slug: Some(slug.to_string()),
            date: date.map(str::to_string),
            pinned,
            ..NewsEntry::default()
        }
    }

    fn slugs(entries: &[NewsEntry]) -> Vec<&str> {
        entries.iter().filter_map(|e| e.slug.as_deref()).collect()
    }

    #[test]
    fn test_date_key_values() {
        assert_eq!(date_key(Some("2024.03.10")), 20240310);
        assert_eq!(date_key(Some("")), 0);
        assert_eq!(date_key(None), 0);
        assert_eq!(date_key(Some("abc")), 0);
        assert_eq!(date_key(Some("2024.3.1")), 202431);
    }

    #[test]
    fn test_pinned_before_newer_unpinned() {
        let entries = vec![
            entry("new", Some("2024.05.01"), None),
            entry("pinned-old", Some("2020.01.01"), Some(true)),
        ];

        assert_eq!(slugs(&order(&entries)), ["pinned-old", "new"]);
    }

    #[test]
    fn test_dates_descending_within_group() {
        let entries = vec![
            entry("feb", Some("2024.02.15"), None),
            entry("mar", Some("2024.03.01"), None),
            entry("none", None, None),
            entry("jan", Some("2024.01.20"), Some(false)),
        ];

        assert_eq!(slugs(&order(&entries)), ["mar", "feb", "jan", "none"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let entries = vec![
            entry("a", Some("2024.01.01"), None),
            entry("b", Some("2024.01.01"), None),
            entry("c", Some("bogus"), None),
            entry("d", None, None),
            entry("e", Some("2024.01.01"), None),
        ];

        assert_eq!(slugs(&order(&entries)), ["a", "b", "e", "c", "d"]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let entries = vec![
            entry("old", Some("2023.01.01"), None),
            entry("new", Some("2024.01.01"), None),
        ];
        let before = entries.clone();

        let _ = order(&entries);

        assert_eq!(entries, before);
    }
}
