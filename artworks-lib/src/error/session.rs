//! Session driver error types

use super::SelectionError;

/// Errors returned through a [`SessionHandle`](crate::session::SessionHandle).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The event loop is no longer running.
    #[error("Session event loop has stopped")]
    Closed,

    /// A selection operation was rejected.
    #[error(transparent)]
    Selection(#[from] SelectionError),
}
