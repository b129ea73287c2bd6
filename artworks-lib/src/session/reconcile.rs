//! Reconciliation between the page-scoped widget selection and the registry.

use crate::error::SelectionError;
use crate::model::Artwork;
use crate::model::ArtworkId;
use crate::model::Page;

use super::SelectionRegistry;

/// Net change to the registry caused by one reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionDelta {
    /// Ids that became selected.
    pub added: Vec<ArtworkId>,
    /// Ids that stopped being selected.
    pub removed: Vec<ArtworkId>,
}

impl SelectionDelta {
    /// Returns `true` if the registry did not change.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Applies the widget's full selection for the visible page.
///
/// The widget reports the complete selected set restricted to the page, not
/// a toggle. Every id on `page` is first removed from the registry, then every
/// id in `selected` is added back. Ids on other pages are untouched.
///
/// With no page loaded only the add phase runs.
pub fn apply_page_selection(
    page: Option<&Page>,
    registry: &mut SelectionRegistry,
    selected: &[Artwork],
) -> SelectionDelta {
    let cleared: Vec<ArtworkId> = page
        .into_iter()
        .flat_map(Page::ids)
        .filter(|&id| registry.remove(id))
        .collect();

    let mut added: Vec<ArtworkId> = selected
        .iter()
        .map(|artwork| artwork.id)
        .filter(|&id| registry.add(id) && !cleared.contains(&id))
        .collect();
    added.sort_unstable();

    let removed = cleared
        .into_iter()
        .filter(|&id| !registry.contains(id))
        .collect();

    SelectionDelta { added, removed }
}

/// Selects the first `count` artworks of `page`, in page order.
///
/// Additive only: nothing is deselected. A `count` above the page length is
/// rejected and leaves the registry unchanged.
///
/// Returns the number of ids that were newly selected.
pub fn bulk_select(
    page: Option<&Page>,
    registry: &mut SelectionRegistry,
    count: usize,
) -> Result<usize, SelectionError> {
    let available = page.map_or(0, Page::len);
    if count > available {
        return Err(SelectionError::CountExceedsPage {
            requested: count,
            available,
        });
    }

    let added = page
        .into_iter()
        .flat_map(Page::ids)
        .take(count)
        .filter(|&id| registry.add(id))
        .count();
    Ok(added)
}
