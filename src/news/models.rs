use serde::{Deserialize, Serialize};

use crate::constants::messages;

/// Per-field decoding that never rejects an entry.
///
/// A field of the wrong JSON type reads as missing, so an odd value hides
/// only itself and never the rest of the entry.
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    fn scalar_text(value: Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Strings only.
    pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Some(s),
            _ => None,
        })
    }

    /// Displayed text: strings, and numbers in their JSON form.
    pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(scalar_text(Value::deserialize(deserializer)?))
    }

    /// Truthiness as the page script sees it: `false`, `0`, `""` and `null`
    /// are false, every other value is true.
    pub fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Null => None,
            Value::Bool(b) => Some(b),
            Value::Number(n) => Some(n.as_f64().is_some_and(|f| f != 0.0)),
            Value::String(s) => Some(!s.is_empty()),
            Value::Array(_) | Value::Object(_) => Some(true),
        })
    }

    /// Arrays of text; anything else is missing. Elements that are neither
    /// strings nor numbers are dropped.
    pub fn text_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(items) => Some(items.into_iter().filter_map(scalar_text).collect()),
            _ => None,
        })
    }
}

/// One announcement from `news.json`.
///
/// Every field is optional in the document. The accessors below apply the
/// display fallbacks (empty strings are treated the same as missing values).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsEntry {
    #[serde(default, deserialize_with = "lenient::string")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub pinned: Option<bool>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub tags: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub cover: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub external_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub body: Option<Vec<String>>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl NewsEntry {
    pub fn is_pinned(&self) -> bool {
        self.pinned == Some(true)
    }

    /// Slug usable in a detail link; empty slugs cannot be deep-linked.
    pub fn linkable_slug(&self) -> Option<&str> {
        non_empty(&self.slug)
    }

    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn date_text(&self) -> &str {
        self.date.as_deref().unwrap_or_default()
    }

    /// Category label shown in the badge, `INFO` when missing.
    pub fn category_label(&self) -> &str {
        non_empty(&self.category).unwrap_or(messages::CATEGORY_FALLBACK)
    }

    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }

    pub fn cover_url(&self) -> Option<&str> {
        non_empty(&self.cover)
    }

    pub fn external_link(&self) -> Option<&str> {
        non_empty(&self.external_url)
    }

    pub fn body_lines(&self) -> &[String] {
        self.body.as_deref().unwrap_or_default()
    }
}

/// The loaded entries together with the outcome of the last load attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsCollection {
    pub entries: Vec<NewsEntry>,
    pub load_failed: bool,
}

impl NewsCollection {
    pub fn loaded(entries: Vec<NewsEntry>) -> Self {
        Self {
            entries,
            load_failed: false,
        }
    }

    pub fn failed() -> Self {
        Self {
            entries: Vec::new(),
            load_failed: true,
        }
    }

    /// First entry whose slug equals `slug`.
    pub fn find_by_slug(&self, slug: &str) -> Option<&NewsEntry> {
        self.entries
            .iter()
            .find(|entry| entry.slug.as_deref() == Some(slug))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_fields() {
        let entry: NewsEntry = serde_json::from_str(
            r#"{
                "slug": "spring-launch",
                "title": "Spring launch",
                "date": "2024.03.01",
                "category": "product",
                "pinned": true,
                "tags": ["launch", "spring"],
                "cover": "/img/spring.jpg",
                "externalUrl": "https://shop.example.com",
                "body": ["Intro", "- one", "- two"]
            }"#,
        )
        .unwrap();

        assert_eq!(entry.linkable_slug(), Some("spring-launch"));
        assert!(entry.is_pinned());
        assert_eq!(entry.tags(), ["launch", "spring"]);
        assert_eq!(entry.external_link(), Some("https://shop.example.com"));
        assert_eq!(entry.body_lines().len(), 3);
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let entry: NewsEntry = serde_json::from_str("{}").unwrap();

        assert_eq!(entry.linkable_slug(), None);
        assert_eq!(entry.title_text(), "");
        assert_eq!(entry.date_text(), "");
        assert_eq!(entry.category_label(), "INFO");
        assert!(entry.tags().is_empty());
        assert!(entry.body_lines().is_empty());
        assert!(!entry.is_pinned());
    }

    #[test]
    fn test_wrong_typed_fields_read_as_missing() {
        let entry: NewsEntry = serde_json::from_str(
            r#"{
                "slug": 7,
                "title": 2024,
                "date": 20240310,
                "category": ["news"],
                "pinned": 1,
                "tags": "launch",
                "cover": false,
                "externalUrl": {"href": "https://example.com"},
                "body": ["Intro", 3, null, {"text": "x"}]
            }"#,
        )
        .unwrap();

        assert_eq!(entry.slug, None);
        assert_eq!(entry.title_text(), "2024");
        assert_eq!(entry.date_text(), "20240310");
        assert_eq!(entry.category_label(), "INFO");
        assert!(entry.is_pinned());
        assert!(entry.tags().is_empty());
        assert_eq!(entry.cover_url(), None);
        assert_eq!(entry.external_link(), None);
        assert_eq!(entry.body_lines(), ["Intro", "3"]);
    }

    #[test]
    fn test_pinned_follows_truthiness() {
        let pinned = |json: &str| {
            serde_json::from_str::<NewsEntry>(&format!(r#"{{"pinned": {json}}}"#))
                .unwrap()
                .is_pinned()
        };

        for truthy in ["true", "1", "-2.5", r#""yes""#, "[]", "{}"] {
            assert!(pinned(truthy), "{truthy} should pin");
        }
        for falsy in ["false", "0", "0.0", r#""""#, "null"] {
            assert!(!pinned(falsy), "{falsy} should not pin");
        }
    }

    #[test]
    fn test_empty_strings_count_as_missing() {
        let entry = NewsEntry {
            slug: Some(String::new()),
            category: Some(String::new()),
            cover: Some(String::new()),
            external_url: Some(String::new()),
            ..NewsEntry::default()
        };

        assert_eq!(entry.linkable_slug(), None);
        assert_eq!(entry.category_label(), "INFO");
        assert_eq!(entry.cover_url(), None);
        assert_eq!(entry.external_link(), None);
    }

    #[test]
    fn test_find_by_slug_returns_first_match() {
        let collection = NewsCollection::loaded(vec![
            NewsEntry {
                slug: Some("dup".to_string()),
                title: Some("first".to_string()),
                ..NewsEntry::default()
            },
            NewsEntry {
                slug: Some("dup".to_string()),
                title: Some("second".to_string()),
                ..NewsEntry::default()
            },
        ]);

        let found = collection.find_by_slug("dup").unwrap();
        assert_eq!(found.title_text(), "first");
        assert!(collection.find_by_slug("missing").is_none());
    }
}
