//! Read-only projections for the rendering layer.

use crate::model::Artwork;
use crate::model::ArtworkId;
use crate::model::Page;
use crate::model::PageReport;
use crate::model::PaginationMeta;

use super::SelectionRegistry;

/// Items of `page` whose id is in `registry`, in page order.
///
/// Pure projection: recomputed on every read and never written back.
pub fn visible_selection(page: &Page, registry: &SelectionRegistry) -> Vec<Artwork> {
    page.items()
        .iter()
        .filter(|artwork| registry.contains(artwork.id))
        .cloned()
        .collect()
}

/// Snapshot of everything a rendering layer needs for one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewModel {
    /// Items of the held page.
    pub items: Vec<Artwork>,
    /// Pagination metadata of the held page.
    pub pagination: Option<PaginationMeta>,
    /// Whether the newest page request is outstanding.
    pub is_loading: bool,
    /// Message of the last failed fetch.
    pub last_error: Option<String>,
    /// Items of the held page that are selected.
    pub visible_selection: Vec<Artwork>,
    /// Number of selected artworks across all pages.
    pub selected_count: usize,
    /// Largest count bulk-select accepts (the held page's length).
    pub max_bulk_select: usize,
    /// Page index of the newest request.
    pub requested_page: Option<u32>,
}

impl ViewModel {
    /// Row range of the held page for a paginator report.
    pub fn report(&self) -> Option<PageReport> {
        self.pagination.as_ref().and_then(PaginationMeta::report)
    }

    /// Returns `true` if the item with `id` is shown as selected.
    pub fn is_selected(&self, id: ArtworkId) -> bool {
        self.visible_selection.iter().any(|artwork| artwork.id == id)
    }
}
