//! Main ArtworksClient

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderValue;
use reqwest::header::ACCEPT;
use reqwest::Client;

use crate::api::listing_url;
use crate::api::parse_listing;
use crate::api::ListingSource;
use crate::config::ListingConfig;
use crate::error::FetchError;
use crate::model::Artwork;
use crate::model::ListingPage;

/// HTTP client for the artworks listing service.
///
/// This client is cheap to clone (uses `Arc` internally), so a clone can be
/// moved into each spawned fetch.
///
/// # Example
///
/// ```ignore
/// use artworks_lib::ArtworksClient;
///
/// let client = ArtworksClient::builder()
///     .page_size(12)
///     .timeout(Duration::from_secs(10))
///     .build()?;
///
/// let listing = client.fetch_page(1).await?;
/// println!("{} artworks", listing.pagination.total);
/// ```
#[derive(Clone)]
pub struct ArtworksClient {
    inner: Arc<ArtworksClientInner>,
}

struct ArtworksClientInner {
    config: ListingConfig,
    http_client: Client,
}

impl ArtworksClient {
    /// Creates a new builder with default settings.
    pub fn builder() -> ArtworksClientBuilder {
        ArtworksClientBuilder::new()
    }

    /// Fetches one page of the listing.
    ///
    /// Non-success statuses surface as [`FetchError::Http`] carrying the
    /// status reason text; bodies that do not decode surface as
    /// [`FetchError::Parse`].
    pub async fn fetch_page(&self, page: u32) -> Result<ListingPage, FetchError> {
        let config = &self.inner.config;
        let fields = config.project_fields.then_some(Artwork::FIELDS);
        let url = listing_url(&config.base_url, page, config.page_size, fields)?;

        log::debug!("Fetching artworks page {} ({})", page, url);

        let mut request = self
            .inner
            .http_client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(timeout) = config.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = status.canonical_reason().unwrap_or("Unknown status");
            log::warn!("Artworks page {} failed with status {}", page, status);
            return Err(FetchError::http(status.as_u16(), message));
        }

        let body = response.text().await?;
        let listing = parse_listing(&body, page)?;

        log::debug!(
            "Fetched artworks page {}: {} items of {}",
            page,
            listing.page.len(),
            listing.pagination.total
        );

        Ok(listing)
    }
}

#[async_trait]
impl ListingSource for ArtworksClient {
    fn page_size(&self) -> usize {
        self.inner.config.page_size
    }

    async fn fetch(&self, page: u32) -> Result<ListingPage, FetchError> {
        self.fetch_page(page).await
    }
}

impl std::fmt::Debug for ArtworksClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArtworksClient")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for constructing an [`ArtworksClient`].
///
/// Every setting has a default, so `ArtworksClient::builder().build()` talks
/// to the public Art Institute of Chicago endpoint with 12 items per page.
///
/// # Example
///
/// ```ignore
/// let client = ArtworksClient::builder()
///     .base_url("http://127.0.0.1:8080/artworks")
///     .page_size(12)
///     .connect_timeout(Duration::from_secs(5))
///     .build()?;
/// ```
#[derive(Debug, Default)]
pub struct ArtworksClientBuilder {
    config: ListingConfig,
    http_client: Option<Client>,
}

impl ArtworksClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all settings with `config`.
    pub fn config(mut self, config: ListingConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the collection endpoint.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config = self.config.with_base_url(url);
        self
    }

    /// Sets the page size.
    pub fn page_size(mut self, size: usize) -> Self {
        self.config = self.config.with_page_size(size);
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_connect_timeout(timeout);
        self
    }

    /// Enables or disables the `fields` projection.
    pub fn project_fields(mut self, enabled: bool) -> Self {
        self.config = self.config.with_project_fields(enabled);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Builds the [`ArtworksClient`].
    pub fn build(self) -> Result<ArtworksClient, FetchError> {
        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.config.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build()?
            }
        };

        Ok(ArtworksClient {
            inner: Arc::new(ArtworksClientInner {
                config: self.config,
                http_client,
            }),
        })
    }
}
