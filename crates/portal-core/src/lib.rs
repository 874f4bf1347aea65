//! Portal Core - Wire types, facet normalization, and error handling.

pub mod config;
pub mod countries;
pub mod error;
pub mod facets;

pub use config::HttpConfig;
pub use countries::{
    canonical_country_name, filter_partner_buckets, map_country_names, UNKNOWN_COUNTRY_KEY,
};
pub use error::PortalError;
pub use facets::{Bucket, Facets, PageProps, SearchResponse};
