//! Selection error types

/// Errors returned by selection operations on the current page.
///
/// Selection edits are local and never touch the listing service; the only
/// failure is a caller asking for more rows than the page holds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// Bulk-select asked for more rows than the current page contains.
    #[error("Cannot select {requested} rows: current page has {available}")]
    CountExceedsPage {
        /// Number of rows requested.
        requested: usize,
        /// Number of rows on the current page.
        available: usize,
    },
}
