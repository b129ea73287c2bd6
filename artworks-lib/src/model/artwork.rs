//! Artwork record

use serde::Deserialize;

/// Identifier of an artwork in the remote collection.
pub type ArtworkId = u64;

/// A single catalogue item.
///
/// Identity is the `id`; the remaining fields are presentation data for one
/// page load. The listing service returns `null` for many of them, so they
/// decode as `Option`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Artwork {
    /// Unique identifier.
    pub id: ArtworkId,
    /// Title of the work.
    #[serde(default)]
    pub title: Option<String>,
    /// Where the work was made.
    #[serde(default)]
    pub place_of_origin: Option<String>,
    /// Artist attribution as displayed by the museum.
    #[serde(default)]
    pub artist_display: Option<String>,
    /// Inscriptions on the work.
    #[serde(default)]
    pub inscriptions: Option<String>,
    /// Earliest year of the date range.
    #[serde(default)]
    pub date_start: Option<i32>,
    /// Latest year of the date range.
    #[serde(default)]
    pub date_end: Option<i32>,
}

impl Artwork {
    /// Field names the catalogue reads, for the listing `fields` projection.
    pub const FIELDS: &[&str] = &[
        "id",
        "title",
        "place_of_origin",
        "artist_display",
        "inscriptions",
        "date_start",
        "date_end",
    ];

    /// Creates an artwork with only an id and title.
    pub fn new(id: ArtworkId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: Some(title.into()),
            place_of_origin: None,
            artist_display: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }

    /// Returns the date range as `(start, end)` if both ends are known.
    pub fn date_range(&self) -> Option<(i32, i32)> {
        Some((self.date_start?, self.date_end?))
    }
}
