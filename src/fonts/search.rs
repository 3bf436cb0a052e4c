//! Remote font search
//!
//! The listing endpoint returns the provider's whole catalog sorted by
//! popularity; filtering by query happens here, on our side. Every failure
//! (network, status, payload) collapses to an empty result.

use std::future::Future;

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::core::settings::{SEARCH_REQUEST_TIMEOUT, SEARCH_RESULT_LIMIT};
use crate::fonts::font::Font;

/// Base URL of the font listing endpoint
pub const FONT_LISTING_URL: &str = "https://www.googleapis.com/webfonts/v1/webfonts";

/// One entry of the remote listing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawFontRecord {
    pub family: String,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FontListing {
    #[serde(default)]
    items: Option<Vec<RawFontRecord>>,
}

/// A read-only font listing service
pub trait FontSource: Send + Sync + 'static {
    /// Fetch listing records for a query. Never fails: errors yield no records.
    fn fetch_by_query(&self, query: &str) -> impl Future<Output = Vec<RawFontRecord>> + Send;
}

/// Client for the Google Fonts developer API
#[derive(Clone)]
pub struct GoogleFontsClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl GoogleFontsClient {
    pub fn new(api_key: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(SEARCH_REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client for font search")?;

        Ok(Self {
            client,
            api_key,
            base_url: FONT_LISTING_URL.to_string(),
        })
    }

    /// Point the client at a different listing endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    async fn fetch_listing(&self) -> Result<Vec<RawFontRecord>> {
        let Some(key) = self.api_key.as_deref() else {
            bail!("no API key configured for the font service");
        };

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("key", key), ("sort", "popularity")])
            .send()
            .await
            .context("font listing request failed")?;

        let status = response.status();
        if !status.is_success() {
            bail!("font listing returned status {status}");
        }

        let listing: FontListing = response
            .json()
            .await
            .context("font listing payload was malformed")?;

        Ok(listing.items.unwrap_or_default())
    }
}

impl FontSource for GoogleFontsClient {
    async fn fetch_by_query(&self, query: &str) -> Vec<RawFontRecord> {
        match self.fetch_listing().await {
            Ok(records) => {
                debug!("Font listing for '{}' returned {} records", query, records.len());
                records
            }
            Err(e) => {
                warn!("Font search for '{}' failed: {:#}", query, e);
                Vec::new()
            }
        }
    }
}

/// The query as the directory and search compare it
pub fn normalize_query(query: &str) -> &str {
    query.trim()
}

/// Keep records whose family contains `query` (case-insensitive), capped at
/// [`SEARCH_RESULT_LIMIT`], and turn them into fonts.
pub fn filter_records(records: &[RawFontRecord], query: &str) -> Vec<Font> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| record.family.to_lowercase().contains(&needle))
        .take(SEARCH_RESULT_LIMIT)
        .map(|record| Font::from_remote(&record.family, record.category.as_deref()))
        .collect()
}

/// Search fonts: the curated list for an empty query, remote matches otherwise
pub async fn search<S: FontSource>(source: &S, curated: &[Font], query: &str) -> Vec<Font> {
    let query = normalize_query(query);
    if query.is_empty() {
        return curated.to_vec();
    }
    let records = source.fetch_by_query(query).await;
    filter_records(&records, query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::curated_fonts;
    use crate::testing::FakeFontSource;

    fn record(family: &str, category: &str) -> RawFontRecord {
        RawFontRecord {
            family: family.to_string(),
            category: Some(category.to_string()),
        }
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let records = vec![
            record("Space Mono", "monospace"),
            record("Roboto", "sans-serif"),
            record("DM Mono", "monospace"),
        ];
        let fonts = filter_records(&records, "MONO");
        let names: Vec<_> = fonts.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Space Mono", "DM Mono"]);
        assert_eq!(fonts[0].value, "'Space Mono', monospace");
    }

    #[test]
    fn test_filter_caps_results() {
        let records: Vec<_> = (0..50)
            .map(|i| record(&format!("Mono {i}"), "monospace"))
            .collect();
        let fonts = filter_records(&records, "mono");
        assert_eq!(fonts.len(), SEARCH_RESULT_LIMIT);
        assert_eq!(fonts[0].name, "Mono 0");
    }

    #[test]
    fn test_listing_without_items_is_empty() {
        let listing: FontListing = serde_json::from_str(r#"{"kind":"webfonts#webfontList"}"#).unwrap();
        assert!(listing.items.unwrap_or_default().is_empty());

        let listing: FontListing = serde_json::from_str(
            r#"{"items":[{"family":"Space Mono","category":"monospace","variants":["regular"]}]}"#,
        )
        .unwrap();
        assert_eq!(listing.items.unwrap()[0].family, "Space Mono");
    }

    #[tokio::test]
    async fn test_empty_query_returns_curated_without_fetching() {
        let source = FakeFontSource::new(vec![record("Space Mono", "monospace")]);
        let curated = curated_fonts();

        assert_eq!(search(&source, &curated, "").await, curated);
        assert_eq!(search(&source, &curated, "   ").await, curated);
        assert!(source.calls().is_empty());
    }

    #[tokio::test]
    async fn test_failed_source_yields_no_fonts() {
        let source = FakeFontSource::failing();
        let fonts = search(&source, &curated_fonts(), "mono").await;
        assert!(fonts.is_empty());
        assert_eq!(source.calls(), vec!["mono".to_string()]);
    }

    #[tokio::test]
    async fn test_client_without_key_degrades_to_empty() {
        let client = GoogleFontsClient::new(None).unwrap();
        assert!(!client.has_api_key());
        assert!(client.fetch_by_query("mono").await.is_empty());
    }
}
