//! Server-side data loader for the landing page.
//!
//! Runs once per page render, before any markup is produced. The policy is
//! fail-open: a broken backend must never prevent the page shell from
//! loading, so every failure mode collapses into zeroed props and the
//! presentation layer shows its empty state instead.

use portal_core::facets::PageProps;
use tracing::{error, warn};

use crate::context::RequestContext;
use crate::search::{SearchClient, SearchParams};

/// Acquires the landing page's initial props with a single backend call.
///
/// On success the raw `count` and `facets` are shape-guarded field by field
/// (`count` absent defaults to 0 independently of `facets` absent defaulting
/// to `null`). On any failure — network error, timeout, error status,
/// malformed body — the result is exactly `{count: 0, facets: null}`.
///
/// Filtering and country-name normalization are deliberately not applied
/// here; the presentation side runs those over the raw buckets.
pub async fn load_home_page(client: &SearchClient, ctx: &RequestContext) -> PageProps {
    match client.fetch(&SearchParams::default(), ctx).await {
        Ok(response) => PageProps::from(response),
        Err(e) if e.is_acquisition_failure() => {
            warn!("Search API unavailable, rendering empty state: {}", e);
            PageProps::default()
        }
        Err(e) => {
            error!("Search API gave an unusable response, rendering empty state: {}", e);
            PageProps::default()
        }
    }
}
