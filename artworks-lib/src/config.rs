//! Listing configuration

use std::time::Duration;

/// Default collection endpoint of the Art Institute of Chicago API.
pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1/artworks";

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Configuration for the listing client.
///
/// The page size is fixed for the lifetime of a session.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use artworks_lib::config::ListingConfig;
///
/// let config = ListingConfig::default()
///     .with_page_size(24)
///     .with_timeout(Duration::from_secs(10));
/// assert_eq!(config.page_size, 24);
/// ```
#[derive(Debug, Clone)]
pub struct ListingConfig {
    /// Collection endpoint, without query string.
    pub base_url: String,

    /// Items per page (`limit` query parameter).
    ///
    /// Default: 12
    pub page_size: usize,

    /// Per-request timeout.
    pub timeout: Option<Duration>,

    /// Connection timeout, applied when building the HTTP client.
    pub connect_timeout: Option<Duration>,

    /// Whether to send a `fields` projection limited to the catalogue's fields.
    ///
    /// Default: true
    pub project_fields: bool,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout: None,
            connect_timeout: None,
            project_fields: true,
        }
    }
}

impl ListingConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the collection endpoint.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the page size. Zero is raised to one.
    pub fn with_page_size(mut self, size: usize) -> Self {
        self.page_size = size.max(1);
        self
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Enables or disables the `fields` projection.
    pub fn with_project_fields(mut self, enabled: bool) -> Self {
        self.project_fields = enabled;
        self
    }
}
