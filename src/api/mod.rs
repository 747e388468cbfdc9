//! # API Module
//!
//! HTTP handlers of the shelfscout web server. They are thin adapters around
//! [`SearchOrchestrator::search`](crate::management::SearchOrchestrator::search)
//! and the HTML renderer.
//!
//! ## Endpoints
//!
//! - [`home`] - search form
//! - [`search`] - runs the pipeline for `?daterange=..&genre=..` and renders the listings
//! - [`image`] - static images from the assets directory
//! - [`health`] - status and version for monitoring
//! - [`not_found`] - fallback for every other path

mod assets;
mod health;
mod search;

pub use assets::{Assets, image, not_found};
pub use health::health;
pub use search::{SearchParams, home, search};
