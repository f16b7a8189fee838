//! Font catalogs
//!
//! A catalog only populates the font picker. When it fails the picker is
//! simply empty; rendering is never blocked on it.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::{ArtError, Result};
use crate::glyph::{BuiltinGlyphSource, GlyphSource};

/// GitHub directory listing of figlet `.flf` fonts
pub const DEFAULT_CATALOG_URL: &str = "https://api.github.com/repos/mskian/ascii-art/contents/fonts";

const FIGLET_EXT: &str = ".flf";

/// Source of selectable font names
#[async_trait]
pub trait FontCatalog: Send + Sync {
    async fn list(&self) -> Result<Vec<String>>;
}

/// Fetch the catalog, logging and swallowing any failure
pub async fn fetch_or_empty(catalog: &dyn FontCatalog) -> Vec<String> {
    match catalog.list().await {
        Ok(fonts) => {
            tracing::debug!("Font catalog returned {} fonts", fonts.len());
            fonts
        }
        Err(e) => {
            tracing::warn!("Error fetching fonts: {}", e);
            Vec::new()
        }
    }
}

/// Catalog of the fonts [`BuiltinGlyphSource`] can draw
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

#[async_trait]
impl FontCatalog for BuiltinCatalog {
    async fn list(&self) -> Result<Vec<String>> {
        Ok(BuiltinGlyphSource.fonts())
    }
}

#[derive(Deserialize)]
struct CatalogEntry {
    name: String,
}

/// Catalog read from a GitHub contents listing
pub struct RemoteCatalog {
    client: Client,
    url: String,
}

impl RemoteCatalog {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

impl Default for RemoteCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_URL)
    }
}

#[async_trait]
impl FontCatalog for RemoteCatalog {
    async fn list(&self) -> Result<Vec<String>> {
        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::USER_AGENT, "corgiart")
            .send()
            .await
            .map_err(|e| ArtError::Catalog(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ArtError::Catalog(format!(
                "Failed to fetch fonts: HTTP {}",
                response.status()
            )));
        }

        let entries: Vec<CatalogEntry> = response
            .json()
            .await
            .map_err(|e| ArtError::Catalog(e.to_string()))?;

        Ok(font_names(entries))
    }
}

fn font_names(entries: Vec<CatalogEntry>) -> Vec<String> {
    entries
        .into_iter()
        .filter_map(|entry| entry.name.strip_suffix(FIGLET_EXT).map(str::to_string))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::all_fonts;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_builtin_catalog_lists_bundled_fonts() {
        let fonts = fetch_or_empty(&BuiltinCatalog).await;
        assert_eq!(fonts.first().map(String::as_str), Some("Standard"));
        assert_eq!(fonts.len(), all_fonts().len());
        assert_eq!(fonts, BuiltinGlyphSource.fonts());
    }

    #[tokio::test]
    async fn test_remote_catalog_strips_extension() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/fonts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "name": "Standard.flf", "type": "file" },
                { "name": "Big Money-ne.flf", "type": "file" },
                { "name": "README.md", "type": "file" }
            ])))
            .mount(&server)
            .await;

        let catalog = RemoteCatalog::new(format!("{}/fonts", server.uri()));
        let fonts = catalog.list().await.unwrap();
        assert_eq!(fonts, vec!["Standard", "Big Money-ne"]);
    }

    #[tokio::test]
    async fn test_remote_failure_degrades_to_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let catalog = RemoteCatalog::new(format!("{}/fonts", server.uri()));
        assert!(matches!(catalog.list().await, Err(ArtError::Catalog(_))));
        assert!(fetch_or_empty(&catalog).await.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_listing_degrades_to_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let catalog = RemoteCatalog::new(server.uri());
        assert!(fetch_or_empty(&catalog).await.is_empty());
    }
}
