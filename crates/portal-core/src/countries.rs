//! Partner-country facet cleanup.
//!
//! The country facet arrives as raw backend identifiers. Two pure steps turn
//! it into a display-ready list: [`filter_partner_buckets`] drops the
//! placeholder entries the search engine uses for unattributable articles,
//! and [`map_country_names`] rewrites the remaining codes to their canonical
//! display names.

use crate::facets::Bucket;

/// Reserved key the backend emits for articles it could not attribute to a
/// partner country.
pub const UNKNOWN_COUNTRY_KEY: &str = "XX";

/// Identifier-to-display-name lookup for partner countries.
///
/// Invariant: no right-hand name ever appears as a left-hand key, so running
/// the normalizer over already-canonical names is a no-op (idempotence).
/// `test_no_canonical_name_is_a_key` enforces this over the whole table.
static COUNTRY_NAMES: &[(&str, &str)] = &[
    ("AT", "Austria"),
    ("AU", "Australia"),
    ("BE", "Belgium"),
    ("CA", "Canada"),
    ("CH", "Switzerland"),
    ("CN", "China"),
    ("CZ", "Czech Republic"),
    ("DE", "Germany"),
    ("DK", "Denmark"),
    ("ES", "Spain"),
    ("FI", "Finland"),
    ("FR", "France"),
    ("GB", "United Kingdom"),
    ("GR", "Greece"),
    ("HK", "Hong Kong"),
    ("HU", "Hungary"),
    ("IL", "Israel"),
    ("IS", "Iceland"),
    ("IT", "Italy"),
    ("JP", "Japan"),
    ("KR", "South Korea"),
    ("MX", "Mexico"),
    ("NL", "Netherlands"),
    ("NO", "Norway"),
    ("PL", "Poland"),
    ("PT", "Portugal"),
    ("SE", "Sweden"),
    ("SK", "Slovakia"),
    ("TR", "Turkey"),
    ("TW", "Taiwan"),
    ("UK", "United Kingdom"),
    ("US", "United States"),
    ("ZA", "South Africa"),
];

/// Looks up the canonical display name for a raw country identifier.
///
/// Returns `None` for identifiers the table does not know; callers are
/// expected to fall back to the raw value rather than fail.
pub fn canonical_country_name(identifier: &str) -> Option<&'static str> {
    COUNTRY_NAMES
        .iter()
        .find(|(code, _)| *code == identifier)
        .map(|(_, name)| *name)
}

/// Drops non-partner entries from a raw country aggregation.
///
/// Removes the backend's unknown-country marker and entries whose key is
/// missing (deserialized as the empty string). Never adds entries and never
/// touches `doc_count`; an absent input yields an empty list, never an
/// error.
pub fn filter_partner_buckets(buckets: Option<&[Bucket]>) -> Vec<Bucket> {
    buckets
        .unwrap_or_default()
        .iter()
        .filter(|bucket| !bucket.key.is_empty() && bucket.key != UNKNOWN_COUNTRY_KEY)
        .cloned()
        .collect()
}

/// Rewrites each bucket key from its raw identifier to the canonical
/// country name, preserving input order.
///
/// Identifiers with no known mapping pass through unchanged; the pipeline
/// is total over arbitrary backend output.
pub fn map_country_names(buckets: Vec<Bucket>) -> Vec<Bucket> {
    buckets
        .into_iter()
        .map(|bucket| Bucket {
            key: match canonical_country_name(&bucket.key) {
                Some(name) => name.to_string(),
                None => bucket.key,
            },
            doc_count: bucket.doc_count,
        })
        .collect()
}
