//! Headless client controller for the catalog page.
//!
//! The browser page is a thin shell over this module: state lives in
//! [`CatalogState`], user interactions arrive as [`Command`]s consumed by the
//! [`CatalogController`], and the visible page is derived by [`view`]. Nothing
//! here touches a DOM, so every flow is testable in-process.

mod api;
mod form;
mod state;
mod view;

pub use api::*;
pub use form::*;
pub use state::*;
pub use view::*;
