//! URL building for the news document

use crate::constants::NEWS_JSON_PATH;

/// Builds the URL of the news document served next to the site's pages.
///
/// # Example
/// ```
/// use site_news::news::urls::build_news_url;
///
/// assert_eq!(build_news_url("https://www.example.com"), "https://www.example.com/news.json");
/// assert_eq!(build_news_url("https://www.example.com/"), "https://www.example.com/news.json");
/// ```
pub fn build_news_url(site_url: &str) -> String {
    format!("{}/{NEWS_JSON_PATH}", site_url.trim_end_matches('/'))
}
