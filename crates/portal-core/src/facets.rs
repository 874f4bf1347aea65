use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One category and its document count within a facet aggregation.
///
/// The backend may emit malformed buckets; a missing `key` deserializes as
/// the empty string so the partner filter can drop it instead of the whole
/// response failing to parse.
///
/// # Examples
///
/// ```
/// use portal_core::facets::Bucket;
///
/// let bucket: Bucket = serde_json::from_str(r#"{"key": "US", "doc_count": 3}"#).unwrap();
/// assert_eq!(bucket.key, "US");
/// assert_eq!(bucket.doc_count, 3);
///
/// // A bucket missing its key still parses, with an empty key.
/// let malformed: Bucket = serde_json::from_str(r#"{"doc_count": 1}"#).unwrap();
/// assert_eq!(malformed.key, "");
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    /// Raw identifier for the category (journal name or country code)
    #[serde(default)]
    pub key: String,
    /// Number of articles in this category
    #[serde(default)]
    pub doc_count: u64,
}

/// Inner `{ "buckets": [...] }` container shared by both facets.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetBuckets {
    #[serde(default)]
    pub buckets: Vec<Bucket>,
}

/// The `_filter_journal` wrapper the search engine puts around the journal
/// aggregation.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct JournalFilter {
    #[serde(default)]
    pub journal: Option<FacetBuckets>,
}

/// The `_filter_country` wrapper around the country aggregation.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryFilter {
    #[serde(default)]
    pub country: Option<FacetBuckets>,
}

/// Facet aggregations returned alongside the search hits.
///
/// Only the journal and country facets are consumed by the landing page.
/// Any other facet the backend happens to return is carried in `extras`
/// untouched, so the props passed downstream stay faithful to the response.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Facets {
    #[serde(rename = "_filter_journal", default, skip_serializing_if = "Option::is_none")]
    pub journal_filter: Option<JournalFilter>,
    #[serde(rename = "_filter_country", default, skip_serializing_if = "Option::is_none")]
    pub country_filter: Option<CountryFilter>,
    /// Facets this page does not consume, preserved as-is
    #[serde(flatten)]
    pub extras: serde_json::Map<String, Value>,
}

impl Facets {
    /// Journal buckets in backend order, or an empty slice when the facet
    /// is absent at any nesting level.
    pub fn journal_buckets(&self) -> &[Bucket] {
        self.journal_filter
            .as_ref()
            .and_then(|f| f.journal.as_ref())
            .map(|j| j.buckets.as_slice())
            .unwrap_or_default()
    }

    /// Raw country buckets, or an empty slice when absent.
    pub fn country_buckets(&self) -> &[Bucket] {
        self.country_filter
            .as_ref()
            .and_then(|f| f.country.as_ref())
            .map(|c| c.buckets.as_slice())
            .unwrap_or_default()
    }
}

/// Body of the backend search response, as consumed by the landing page.
///
/// Both fields are optional on the wire; defaults are applied field by
/// field when the props are assembled, never as a blanket fallback.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct SearchResponse {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub facets: Option<Facets>,
}

/// Initial props handed to the page shell.
///
/// This is the sole contract surface between the data pipeline and the
/// presentation layer: `count` is never negative and defaults to 0;
/// `facets` is `null` (never missing) when the backend provided none.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PageProps {
    pub count: u64,
    pub facets: Option<Facets>,
}

impl From<SearchResponse> for PageProps {
    fn from(response: SearchResponse) -> Self {
        Self {
            count: response.count.unwrap_or(0),
            facets: response.facets,
        }
    }
}
