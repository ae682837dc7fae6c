//! Retrieval and decoding of the news document

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, error, info, instrument, warn};

use super::models::NewsEntry;
use crate::error::AppError;

/// Decodes a news document into its entries.
///
/// `items` is taken when it is an array and treated as empty otherwise. Items
/// that are not objects are skipped; inside an object a field of the wrong
/// JSON type reads as missing and the entry is kept. A `null` document is an
/// error.
pub fn parse_news_document(text: &str, origin: &str) -> Result<Vec<NewsEntry>, AppError> {
    if text.trim().is_empty() {
        return Err(AppError::empty_document(origin));
    }

    let document: Value = serde_json::from_str(text).map_err(|e| {
        error!("News document from {origin} is not valid JSON: {e}");
        AppError::malformed_json(e.to_string(), origin)
    })?;

    if document.is_null() {
        return Err(AppError::unexpected_structure("document is null", origin));
    }

    let Some(Value::Array(items)) = document.get("items") else {
        debug!("News document from {origin} has no items array, treating as empty");
        return Ok(Vec::new());
    };

    let entries = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            if !item.is_object() {
                warn!("Skipping news item {index} from {origin}: not an object");
                return None;
            }
            match NewsEntry::deserialize(item) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("Skipping news item {index} from {origin}: {e}");
                    None
                }
            }
        })
        .collect();

    Ok(entries)
}

/// Fetches and decodes the news document over HTTP.
///
/// There is no retry: a failed request is reported once and the caller
/// decides what to show.
#[instrument(skip(client))]
pub async fn fetch_news(client: &Client, url: &str) -> Result<Vec<NewsEntry>, AppError> {
    info!("Fetching news from URL: {url}");

    let response = client.get(url).send().await.map_err(|e| {
        error!("Request failed for URL {}: {}", url, e);
        if e.is_timeout() {
            AppError::network_timeout(url)
        } else if e.is_connect() {
            AppError::network_connection(url, e.to_string())
        } else {
            AppError::NewsFetch(e)
        }
    })?;

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::news_not_found(url),
            400..=499 => AppError::client_error(status_code, reason, url),
            _ => AppError::server_error(status_code, reason, url),
        });
    }

    let response_text = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        AppError::NewsFetch(e)
    })?;

    debug!("Response length: {} bytes", response_text.len());

    parse_news_document(&response_text, url)
}

/// Reads and decodes a news document from disk.
pub async fn read_news_file(path: &Path) -> Result<Vec<NewsEntry>, AppError> {
    let origin = path.display().to_string();
    info!("Reading news from file: {origin}");

    let text = tokio::fs::read_to_string(path).await.map_err(|e| {
        error!("Failed to read news file {origin}: {e}");
        AppError::Io(e)
    })?;

    parse_news_document(&text, &origin)
}
