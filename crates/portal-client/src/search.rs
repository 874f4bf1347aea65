use portal_core::config::HttpConfig;
use portal_core::error::PortalError;
use portal_core::facets::SearchResponse;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Url};
use tracing::warn;

use crate::context::RequestContext;

/// Path of the article search endpoint, relative to the API base URL.
const SEARCH_PATH: &str = "search/article/";

/// Logical search parameters for the backend call.
///
/// The landing page sends the default (empty) set; every field is appended
/// to the query string only when present.
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    pub query: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

/// HTTP client for the repository's backend search API.
///
/// Owns a single `reqwest::Client` with a bounded timeout and forwards the
/// stored credential plus the originating client address on every call.
///
/// # Examples
///
/// ```no_run
/// use portal_client::{RequestContext, SearchClient, SearchParams};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = SearchClient::new("https://backend.scoap3.org/api/", None)?;
/// let ctx = RequestContext::new(Some("10.0.0.5".to_string()), None);
/// let response = client.fetch(&SearchParams::default(), &ctx).await?;
/// println!("{} open access articles", response.count.unwrap_or(0));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SearchClient {
    client: Client,
    base_url: Url,
    auth_token: Option<String>,
    timeout_secs: u64,
}

impl SearchClient {
    /// Creates a search client for the given API base URL.
    ///
    /// `auth_token` is the pre-existing backend credential; `None` means
    /// calls go out without an `Authorization` header.
    ///
    /// # Errors
    ///
    /// Returns `PortalError::InvalidUrl` if the base URL is malformed and
    /// `PortalError::ClientError` if the HTTP client cannot be built.
    pub fn new(base_url_str: &str, auth_token: Option<String>) -> Result<Self, PortalError> {
        Self::with_config(base_url_str, auth_token, HttpConfig::default())
    }

    /// Same as [`SearchClient::new`] but with explicit HTTP settings.
    pub fn with_config(
        base_url_str: &str,
        auth_token: Option<String>,
        config: HttpConfig,
    ) -> Result<Self, PortalError> {
        let base_url = Url::parse(base_url_str)
            .map_err(|_| PortalError::InvalidUrl(format!("Invalid API base URL: {}", base_url_str)))?;

        let client = Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()
            .map_err(|e| PortalError::ClientError(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            auth_token,
            timeout_secs: config.timeout.as_secs(),
        })
    }

    /// Builds the complete backend URL for a search call.
    pub fn search_url(&self, params: &SearchParams) -> Result<Url, PortalError> {
        let mut url = self
            .base_url
            .join(SEARCH_PATH)
            .map_err(|e| PortalError::InvalidUrl(e.to_string()))?;

        {
            let mut pairs = url.query_pairs_mut();
            if let Some(query) = &params.query {
                pairs.append_pair("search", query);
            }
            if let Some(page) = params.page {
                pairs.append_pair("page", &page.to_string());
            }
            if let Some(page_size) = params.page_size {
                pairs.append_pair("page_size", &page_size.to_string());
            }
        }

        // An empty parameter set must not leave a dangling '?'.
        if url.query() == Some("") {
            url.set_query(None);
        }

        Ok(url)
    }

    /// Assembles the forwarding headers for an outbound call.
    ///
    /// `Authorization: Token <key>` when a credential is configured, and
    /// `X-Forwarded-For` with the resolved client address. Either header is
    /// simply omitted when its value is unavailable; omission is never an
    /// error.
    pub fn headers(&self, ctx: &RequestContext) -> HeaderMap {
        let mut headers = HeaderMap::new();

        if let Some(token) = &self.auth_token {
            match HeaderValue::from_str(&format!("Token {}", token)) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => warn!("Auth token contains invalid header characters; omitting"),
            }
        }

        if let Some(client_ip) = ctx.client_ip() {
            match HeaderValue::from_str(&client_ip) {
                Ok(value) => {
                    headers.insert("X-Forwarded-For", value);
                }
                Err(_) => warn!("Client address is not a valid header value; omitting"),
            }
        }

        headers
    }

    /// Performs the single outbound search call for a page render.
    ///
    /// Exactly one GET, no retries: a transient backend failure surfaces as
    /// an error here and becomes the page's empty state upstream.
    pub async fn fetch(
        &self,
        params: &SearchParams,
        ctx: &RequestContext,
    ) -> Result<SearchResponse, PortalError> {
        let url = self.search_url(params)?;

        let response = self
            .client
            .get(url.clone())
            .headers(self.headers(ctx))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PortalError::Timeout(self.timeout_secs)
                } else if e.is_connect() {
                    PortalError::NetworkError(format!("Connection failed: {}", e))
                } else {
                    PortalError::ClientError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PortalError::ClientError(format!(
                "HTTP {} from {}",
                status.as_u16(),
                url
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| PortalError::ClientError(e.to_string()))?;

        if body.is_empty() {
            return Err(PortalError::EmptyResponse);
        }

        Ok(serde_json::from_str(&body)?)
    }
}
