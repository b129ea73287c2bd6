//! Listing source trait and wire format.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::error::FetchError;
use crate::model::Artwork;
use crate::model::ListingPage;
use crate::model::Page;
use crate::model::PaginationMeta;

/// A remote paged collection of artworks.
///
/// Implementations fetch exactly one page per call and keep no state between
/// calls. No retry is performed here; retry policy belongs to the caller.
///
/// # Example
///
/// ```ignore
/// use artworks_lib::api::ListingSource;
///
/// struct Fixed(Vec<Artwork>);
///
/// #[async_trait]
/// impl ListingSource for Fixed {
///     fn page_size(&self) -> usize {
///         12
///     }
///
///     async fn fetch(&self, page: u32) -> Result<ListingPage, FetchError> {
///         todo!("slice self.0 for the page")
///     }
/// }
/// ```
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Page size used for every request of this source.
    fn page_size(&self) -> usize;

    /// Fetches the 1-based page `page`.
    ///
    /// Returns [`FetchError::InvalidPage`] for page 0.
    async fn fetch(&self, page: u32) -> Result<ListingPage, FetchError>;
}

#[async_trait]
impl<T: ListingSource + ?Sized> ListingSource for Arc<T> {
    fn page_size(&self) -> usize {
        (**self).page_size()
    }

    async fn fetch(&self, page: u32) -> Result<ListingPage, FetchError> {
        (**self).fetch(page).await
    }
}

/// Listing response body.
///
/// `config` and `info` members of the response are ignored.
#[derive(Debug, Deserialize)]
pub struct ListingResponse {
    /// Collection-wide pagination block.
    pub pagination: PaginationMeta,
    /// Items of the requested page.
    pub data: Vec<Artwork>,
}

impl ListingResponse {
    /// Converts the response into a [`ListingPage`] for the requested index.
    ///
    /// The pagination block is pinned to the requested index so it always
    /// describes the page it travels with, even if the service reported a
    /// different (e.g. clamped) page.
    pub fn into_listing_page(self, page: u32) -> ListingPage {
        let mut pagination = self.pagination;
        if pagination.current_page != u64::from(page) {
            log::warn!(
                "Listing reported page {} for request of page {}",
                pagination.current_page,
                page
            );
            pagination.current_page = u64::from(page);
        }
        ListingPage {
            page: Page::new(page, self.data),
            pagination,
        }
    }
}

/// Decodes a listing response body fetched for `page`.
pub fn parse_listing(body: &str, page: u32) -> Result<ListingPage, FetchError> {
    let response: ListingResponse = serde_json::from_str(body)
        .map_err(|e| FetchError::parse_with_body(e.to_string(), body))?;
    Ok(response.into_listing_page(page))
}

/// Builds the request URL for one page of the listing.
///
/// Produces `<base>?page=<page>&limit=<limit>` and, when `fields` is given,
/// a comma-joined `fields` projection.
pub fn listing_url(
    base_url: &str,
    page: u32,
    limit: usize,
    fields: Option<&[&str]>,
) -> Result<Url, FetchError> {
    if page == 0 {
        return Err(FetchError::InvalidPage(page));
    }

    let mut url = Url::parse(base_url.trim_end_matches('/'))?;
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("page", &page.to_string());
        query.append_pair("limit", &limit.to_string());
        if let Some(fields) = fields {
            query.append_pair("fields", &fields.join(","));
        }
    }
    Ok(url)
}
