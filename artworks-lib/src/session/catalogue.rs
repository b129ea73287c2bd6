//! Catalogue session: page state plus cross-page selection.

use crate::api::ListingSource;
use crate::error::FetchError;
use crate::error::SelectionError;
use crate::model::Artwork;
use crate::model::ListingPage;

use super::reconcile;
use super::FetchTicket;
use super::PageState;
use super::Resolution;
use super::SelectionDelta;
use super::SelectionRegistry;
use super::ViewModel;

/// A page fetch issued by [`CatalogueSession::navigate`].
///
/// Run it against a [`ListingSource`] (or fetch by other means and call
/// [`FetchRequest::finish`]) and hand the completion back to
/// [`CatalogueSession::complete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a page request does nothing until it is run"]
pub struct FetchRequest {
    ticket: FetchTicket,
}

impl FetchRequest {
    /// The requested page index.
    pub fn page(&self) -> u32 {
        self.ticket.page()
    }

    /// Fetches the page from `source`.
    pub async fn run(self, source: &dyn ListingSource) -> FetchCompletion {
        let result = source.fetch(self.ticket.page()).await;
        self.finish(result)
    }

    /// Pairs an externally obtained result with this request.
    pub fn finish(self, result: Result<ListingPage, FetchError>) -> FetchCompletion {
        FetchCompletion {
            ticket: self.ticket,
            result,
        }
    }
}

/// A resolved page fetch, tagged with the request it answers.
#[derive(Debug)]
pub struct FetchCompletion {
    ticket: FetchTicket,
    result: Result<ListingPage, FetchError>,
}

/// State of one browsing session.
///
/// Owns the current-page state and the selection registry. All mutation
/// happens through `&mut self`, one event at a time; the only asynchronous
/// step is running a [`FetchRequest`], which happens outside the session.
///
/// # Example
///
/// ```ignore
/// let mut session = CatalogueSession::new();
///
/// let request = session.navigate(1);
/// let completion = request.run(&client).await;
/// session.complete(completion);
///
/// session.bulk_select(2)?;
/// let view = session.view();
/// assert_eq!(view.visible_selection.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CatalogueSession {
    pages: PageState,
    selection: SelectionRegistry,
}

impl CatalogueSession {
    /// Create a session with nothing loaded and nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request `page`. Any outstanding request becomes stale.
    ///
    /// Requesting the page already shown fetches it again, which is how a
    /// caller retries after a failure.
    pub fn navigate(&mut self, page: u32) -> FetchRequest {
        log::debug!("Navigating to page {}", page);
        FetchRequest {
            ticket: self.pages.request(page),
        }
    }

    /// Apply a finished fetch.
    ///
    /// Returns `false` if the completion was stale and has been discarded.
    pub fn complete(&mut self, completion: FetchCompletion) -> bool {
        self.pages.resolve(completion.ticket, completion.result) == Resolution::Applied
    }

    /// Apply the widget's selection for the current page.
    pub fn page_selection_changed(&mut self, selected: &[Artwork]) -> SelectionDelta {
        let delta = reconcile::apply_page_selection(self.pages.page(), &mut self.selection, selected);
        if !delta.is_empty() {
            log::debug!(
                "Page selection changed: +{:?} -{:?} ({} selected)",
                delta.added,
                delta.removed,
                self.selection.len()
            );
        }
        delta
    }

    /// Select the first `count` items of the current page.
    ///
    /// Returns the number of newly selected items.
    pub fn bulk_select(&mut self, count: usize) -> Result<usize, SelectionError> {
        let result = reconcile::bulk_select(self.pages.page(), &mut self.selection, count);
        match &result {
            Ok(added) => log::debug!("Bulk-selected {} rows ({} new)", count, added),
            Err(err) => log::warn!("Bulk-select rejected: {}", err),
        }
        result
    }

    /// Items of the current page that are selected, in page order.
    pub fn visible_selection(&self) -> Vec<Artwork> {
        self.pages
            .page()
            .map(|page| super::visible_selection(page, &self.selection))
            .unwrap_or_default()
    }

    /// Build a snapshot for the rendering layer.
    pub fn view(&self) -> ViewModel {
        ViewModel {
            items: self.pages.items().to_vec(),
            pagination: self.pages.pagination().copied(),
            is_loading: self.pages.is_loading(),
            last_error: self.pages.last_error().map(str::to_string),
            visible_selection: self.visible_selection(),
            selected_count: self.selection.len(),
            max_bulk_select: self.pages.items().len(),
            requested_page: self.pages.requested_page(),
        }
    }

    /// The current-page state.
    pub fn pages(&self) -> &PageState {
        &self.pages
    }

    /// The selection registry.
    pub fn selection(&self) -> &SelectionRegistry {
        &self.selection
    }
}
