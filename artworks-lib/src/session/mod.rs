//! Browsing session: current page, cross-page selection and the event loop
//! that ties them together.

mod catalogue;
mod driver;
mod page_state;
mod reconcile;
mod selection;
mod view;

pub use catalogue::*;
pub use driver::*;
pub use page_state::*;
pub use reconcile::*;
pub use selection::*;
pub use view::*;
