//! Landing-page routes.
//!
//! `GET /api/home` exposes the raw page props exactly as the loader produced
//! them; `GET /` serves the rendered summary the tab widgets display. The
//! split mirrors the two layers of the pipeline: acquisition hands raw
//! facets downstream, and only the presentation side filters and normalizes
//! the partner-country buckets.

use axum::extract::{ConnectInfo, State};
use axum::http::HeaderMap;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde::Serialize;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;

use portal_client::{load_home_page, RequestContext, SearchClient};
use portal_core::countries::{filter_partner_buckets, map_country_names};
use portal_core::facets::{Bucket, PageProps};

/// Shared state for the landing-page routes.
#[derive(Clone)]
pub struct AppState {
    pub search: SearchClient,
}

/// Builds the portal router.
pub fn router(search: SearchClient) -> Router {
    Router::new()
        .route("/", get(home_page))
        .route("/api/home", get(page_props))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { search })
}

/// Forwarding context for one inbound page request: the verbatim
/// `X-Forwarded-For` value if a proxy supplied one, plus the transport peer.
fn request_context(headers: &HeaderMap, peer: SocketAddr) -> RequestContext {
    let forwarded_for = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    RequestContext::new(forwarded_for, Some(peer.ip()))
}

/// Raw page props: the sole contract surface handed to the page shell.
async fn page_props(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Json<PageProps> {
    let ctx = request_context(&headers, peer);
    Json(load_home_page(&state.search, &ctx).await)
}

/// What the landing page displays: the article count plus the two tab
/// lists. `empty` tells the shell to render its empty-state widget instead
/// of tabs.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HomeSummary {
    pub count: u64,
    pub journals: Vec<Bucket>,
    pub partners: Vec<Bucket>,
    pub empty: bool,
}

impl From<PageProps> for HomeSummary {
    fn from(props: PageProps) -> Self {
        let (journals, partners) = match &props.facets {
            Some(facets) => (
                facets.journal_buckets().to_vec(),
                map_country_names(filter_partner_buckets(Some(facets.country_buckets()))),
            ),
            None => (Vec::new(), Vec::new()),
        };

        Self {
            count: props.count,
            empty: journals.is_empty() && partners.is_empty(),
            journals,
            partners,
        }
    }
}

/// Rendered home summary consumed by the tab widgets.
async fn home_page(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Json<HomeSummary> {
    let ctx = request_context(&headers, peer);
    let props = load_home_page(&state.search, &ctx).await;
    Json(HomeSummary::from(props))
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::facets::SearchResponse;

    const WORKED_EXAMPLE: &str = r#"{
        "count": 42,
        "facets": {
            "_filter_journal": {"journal": {"buckets": [{"key": "J1", "doc_count": 5}]}},
            "_filter_country": {"country": {"buckets": [
                {"key": "XX", "doc_count": 1},
                {"key": "US", "doc_count": 3}
            ]}}
        }
    }"#;

    fn props_from(json: &str) -> PageProps {
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        PageProps::from(response)
    }

    #[test]
    fn test_summary_from_worked_example() {
        let summary = HomeSummary::from(props_from(WORKED_EXAMPLE));

        assert_eq!(summary.count, 42);
        assert_eq!(summary.journals.len(), 1);
        assert_eq!(summary.journals[0].key, "J1");
        assert_eq!(summary.journals[0].doc_count, 5);
        assert_eq!(summary.partners.len(), 1);
        assert_eq!(summary.partners[0].key, "United States");
        assert_eq!(summary.partners[0].doc_count, 3);
        assert!(!summary.empty);
    }

    #[test]
    fn test_summary_from_degraded_props() {
        let summary = HomeSummary::from(PageProps::default());

        assert_eq!(summary.count, 0);
        assert!(summary.journals.is_empty());
        assert!(summary.partners.is_empty());
        assert!(summary.empty);
    }

    #[test]
    fn test_summary_empty_when_facets_present_but_bare() {
        let summary = HomeSummary::from(props_from(r#"{"count": 3, "facets": {}}"#));
        assert_eq!(summary.count, 3);
        assert!(summary.empty);
    }

    #[tokio::test]
    async fn test_routes_end_to_end() {
        // Stub backend standing in for the search API.
        let backend =
            Router::new().route("/search/article/", get(|| async { WORKED_EXAMPLE }));
        let backend_listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let backend_addr = backend_listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(backend_listener, backend).await.unwrap();
        });

        let search = SearchClient::new(&format!("http://{}/", backend_addr), None).unwrap();
        let app = router(search);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .unwrap();
        });

        // Raw contract: the XX sentinel is still in the props.
        let props: serde_json::Value = reqwest::get(format!("http://{}/api/home", addr))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(props["count"], 42);
        let raw_countries = &props["facets"]["_filter_country"]["country"]["buckets"];
        assert_eq!(raw_countries.as_array().unwrap().len(), 2);

        // Rendered summary: filtered and normalized.
        let summary: serde_json::Value = reqwest::get(format!("http://{}/", addr))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(summary["count"], 42);
        assert_eq!(summary["partners"][0]["key"], "United States");
        assert_eq!(summary["empty"], false);
    }
}
