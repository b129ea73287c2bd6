//! Current-page state with last-request-wins resolution.

use crate::error::FetchError;
use crate::model::Artwork;
use crate::model::ListingPage;
use crate::model::Page;
use crate::model::PaginationMeta;

/// Load status of the current page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing has been requested yet.
    #[default]
    Idle,
    /// A fetch for the requested page is outstanding.
    Loading,
    /// The requested page is held.
    Loaded,
    /// The last fetch for the requested page failed.
    Failed,
}

/// Identifies one page request.
///
/// Generations increase with every request; only the newest one may change
/// the state when it resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    page: u32,
}

impl FetchTicket {
    /// The page index that was requested.
    pub fn page(&self) -> u32 {
        self.page
    }
}

/// Outcome of resolving a fetch against the page state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The result was the newest request and has been stored.
    Applied,
    /// A newer request was issued since; the result was dropped.
    Stale,
}

/// Holds the most recently fetched page and its loading/error status.
///
/// While a fetch is outstanding the previously loaded page stays readable so
/// selection edits on it remain possible. A failed fetch clears the held page
/// and pagination, and the error message stays until the next success.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    status: LoadStatus,
    next_generation: u64,
    pending: Option<FetchTicket>,
    requested: Option<u32>,
    current: Option<ListingPage>,
    last_error: Option<String>,
    stale_discards: u64,
}

impl PageState {
    /// Create an idle page state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request for `page`, superseding any outstanding one.
    pub fn request(&mut self, page: u32) -> FetchTicket {
        self.next_generation += 1;
        let ticket = FetchTicket {
            generation: self.next_generation,
            page,
        };
        if let Some(previous) = self.pending.replace(ticket) {
            log::debug!(
                "Page {} request superseded by page {}",
                previous.page,
                page
            );
        }
        self.requested = Some(page);
        self.status = LoadStatus::Loading;
        ticket
    }

    /// Resolve a request with its fetch result.
    ///
    /// Results for any ticket other than the newest outstanding one are
    /// discarded without touching the state.
    pub fn resolve(
        &mut self,
        ticket: FetchTicket,
        result: Result<ListingPage, FetchError>,
    ) -> Resolution {
        if self.pending != Some(ticket) {
            self.stale_discards += 1;
            log::warn!(
                "Discarding stale response for page {} (generation {}, latest {})",
                ticket.page,
                ticket.generation,
                self.next_generation
            );
            return Resolution::Stale;
        }
        self.pending = None;

        match result {
            Ok(listing) => {
                log::debug!("Page {} loaded with {} items", ticket.page, listing.page.len());
                self.current = Some(listing);
                self.last_error = None;
                self.status = LoadStatus::Loaded;
            }
            Err(err) => {
                log::warn!("Page {} failed to load: {}", ticket.page, err);
                self.current = None;
                self.last_error = Some(err.to_string());
                self.status = LoadStatus::Failed;
            }
        }
        Resolution::Applied
    }

    /// Current status.
    pub fn status(&self) -> LoadStatus {
        self.status
    }

    /// Returns `true` while the newest request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// The held page, if any.
    pub fn page(&self) -> Option<&Page> {
        self.current.as_ref().map(|listing| &listing.page)
    }

    /// Items of the held page, empty if none.
    pub fn items(&self) -> &[Artwork] {
        self.page().map(Page::items).unwrap_or_default()
    }

    /// Pagination metadata of the held page.
    pub fn pagination(&self) -> Option<&PaginationMeta> {
        self.current.as_ref().map(|listing| &listing.pagination)
    }

    /// Message of the last failed fetch, cleared by the next success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Page index of the newest request, if any was made.
    pub fn requested_page(&self) -> Option<u32> {
        self.requested
    }

    /// Number of responses dropped because a newer request superseded them.
    pub fn stale_discards(&self) -> u64 {
        self.stale_discards
    }
}
