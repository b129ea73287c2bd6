//! Page type for fetched listing results.

use super::Artwork;
use super::ArtworkId;
use super::PaginationMeta;

/// One fetched slice of the remote collection.
///
/// Pages are transient: each successful navigation replaces the held page
/// wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    index: u32,
    items: Vec<Artwork>,
}

impl Page {
    /// Creates a page for the given 1-based index.
    pub fn new(index: u32, items: Vec<Artwork>) -> Self {
        Self { index, items }
    }

    /// Returns the page index this page was fetched for.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Returns the items in remote order.
    pub fn items(&self) -> &[Artwork] {
        &self.items
    }

    /// Consumes the page and returns the items.
    pub fn into_items(self) -> Vec<Artwork> {
        self.items
    }

    /// Returns the ids of every item on the page, in page order.
    pub fn ids(&self) -> impl Iterator<Item = ArtworkId> + '_ {
        self.items.iter().map(|item| item.id)
    }

    /// Returns `true` if an item with `id` is on this page.
    pub fn contains(&self, id: ArtworkId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Returns the number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if this page has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Result of a single listing fetch: the page plus collection-wide metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPage {
    /// The fetched page.
    pub page: Page,
    /// Pagination metadata reported alongside it.
    pub pagination: PaginationMeta,
}
