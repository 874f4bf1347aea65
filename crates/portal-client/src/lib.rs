//! Portal Client - backend search API access for the landing page.
//!
//! This crate covers the acquisition half of the landing-page pipeline:
//!
//! - [`context`] - per-request forwarding context (client address resolution)
//! - [`search`] - request building and the single outbound search call
//! - [`loader`] - fail-open assembly of the page's initial props

pub mod context;
pub mod loader;
pub mod search;

pub use context::RequestContext;
pub use loader::load_home_page;
pub use search::{SearchClient, SearchParams};
