//! Listing service API

mod listing;

pub use listing::*;
