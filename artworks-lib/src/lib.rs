//! Artworks catalogue library
//!
//! Lazily paginated access to a remote artworks listing, with a selection set
//! that spans pages while only the current page is held in memory.

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod session;

mod client;

pub use client::*;
