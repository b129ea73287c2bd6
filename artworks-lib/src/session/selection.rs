//! Selection registry.
//!
//! The registry is the page-independent record of which artworks the user
//! has selected. It survives navigation and may hold ids of artworks that are
//! not on the currently loaded page.

use std::collections::BTreeSet;
use std::collections::HashSet;

use crate::model::ArtworkId;

/// Id-keyed set of selected artworks.
///
/// Membership is only ever changed by explicit user actions; nothing here
/// infers selection from page contents. All operations are idempotent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionRegistry {
    selected: HashSet<ArtworkId>,
}

impl SelectionRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an id. Returns `true` if it was not already selected.
    pub fn add(&mut self, id: ArtworkId) -> bool {
        self.selected.insert(id)
    }

    /// Remove an id. Returns `true` if it was selected.
    pub fn remove(&mut self, id: ArtworkId) -> bool {
        self.selected.remove(&id)
    }

    /// Check if an id is selected.
    pub fn contains(&self, id: ArtworkId) -> bool {
        self.selected.contains(&id)
    }

    /// Get all selected ids (sorted for deterministic ordering).
    pub fn snapshot(&self) -> BTreeSet<ArtworkId> {
        self.selected.iter().copied().collect()
    }

    /// Get the number of selected ids.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

impl FromIterator<ArtworkId> for SelectionRegistry {
    fn from_iter<I: IntoIterator<Item = ArtworkId>>(iter: I) -> Self {
        Self {
            selected: iter.into_iter().collect(),
        }
    }
}
