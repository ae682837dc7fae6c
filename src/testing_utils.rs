use crate::news::NewsEntry;

/// Test utilities for creating news entries and documents
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// A minimal linkable entry
    pub fn create_entry(slug: &str, date: &str) -> NewsEntry {
        NewsEntry {
            slug: Some(slug.to_string()),
            title: Some(format!("Title of {slug}")),
            date: Some(date.to_string()),
            category: Some("NEWS".to_string()),
            ..NewsEntry::default()
        }
    }

    /// A pinned entry
    pub fn create_pinned_entry(slug: &str, date: &str) -> NewsEntry {
        NewsEntry {
            pinned: Some(true),
            ..Self::create_entry(slug, date)
        }
    }

    /// An entry with every optional part filled in
    pub fn create_full_entry(slug: &str) -> NewsEntry {
        NewsEntry {
            slug: Some(slug.to_string()),
            title: Some(format!("Full story {slug}")),
            date: Some("2024.04.01".to_string()),
            category: Some("Event".to_string()),
            pinned: Some(false),
            tags: Some(vec!["tokyo".to_string(), "booth".to_string()]),
            cover: Some(format!("/img/{slug}.jpg")),
            external_url: Some("https://tickets.example.com".to_string()),
            body: Some(vec![
                "We are exhibiting.".to_string(),
                "- Hall A".to_string(),
                "- Booth 12".to_string(),
                "See you there.".to_string(),
            ]),
        }
    }

    /// `count` entries on consecutive days of January 2024, oldest first
    pub fn create_daily_entries(count: usize) -> Vec<NewsEntry> {
        (1..=count)
            .map(|day| Self::create_entry(&format!("day-{day}"), &format!("2024.01.{day:02}")))
            .collect()
    }

    /// Serialises entries as a `news.json` document
    pub fn news_document(entries: &[NewsEntry]) -> String {
        serde_json::json!({ "items": entries }).to_string()
    }
}
