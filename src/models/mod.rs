//! Data models for the wine cellar catalog.
//!
//! These models match the upstream record store's JSON wire shape exactly, so
//! the proxy and the client controller share one definition of the contract.

mod wine;

pub use wine::*;
