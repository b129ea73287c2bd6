//! Error types

mod fetch;
mod selection;
mod session;

pub use fetch::*;
pub use selection::*;
pub use session::*;
