//! Client for the external address-search (geocoding) service.
//!
//! The service speaks a plain HTTP GET interface returning a JSON array of
//! matches ordered by relevance. Responses that are not an array are treated
//! as an empty match list, never as a hard failure.

use std::time::Duration;

use anyhow::{Context, Result};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::Value;

use crate::domain::model::Candidate;

/// Locale preference sent with every lookup.
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Maximum number of candidates requested and retained.
pub const RESULT_LIMIT: usize = 5;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// Everything except unreserved characters is escaped, so a free-text query
// like "100 Main St" becomes "100%20Main%20St".
const QUERY_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Blocking HTTP client for the address-search endpoint. Cheap to clone;
/// clones share the underlying connection pool.
#[derive(Clone)]
pub struct Geocoder {
    agent: ureq::Agent,
    endpoint: String,
}

impl Geocoder {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(REQUEST_TIMEOUT)
            .build();
        Self {
            agent,
            endpoint: endpoint.into(),
        }
    }

    /// Full request URL for a free-text query.
    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}?format=json&q={}&limit={}",
            self.endpoint,
            utf8_percent_encode(query, QUERY_SET),
            RESULT_LIMIT
        )
    }

    /// Look up candidates for a free-text address query, best match first.
    pub fn search(&self, query: &str) -> Result<Vec<Candidate>> {
        let body: Value = self
            .agent
            .get(&self.search_url(query))
            .set("Accept-Language", ACCEPT_LANGUAGE)
            .call()
            .context("address search request failed")?
            .into_json()
            .context("address search response was not valid JSON")?;
        Ok(parse_candidates(&body))
    }

    /// Resolve a stored address to coordinates; first (best) match wins.
    pub fn locate(&self, address: &str) -> Result<Option<(f64, f64)>> {
        let found = self.search(address)?;
        Ok(found
            .first()
            .map(|candidate| (candidate.latitude, candidate.longitude)))
    }
}

/// Extract candidates from a response body. A non-array body yields an empty
/// list; entries missing a label or with unparsable coordinates are skipped.
pub fn parse_candidates(body: &Value) -> Vec<Candidate> {
    let Some(entries) = body.as_array() else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(candidate_from_entry)
        .take(RESULT_LIMIT)
        .collect()
}

fn candidate_from_entry(entry: &Value) -> Option<Candidate> {
    let display_name = entry.get("display_name")?.as_str()?.to_owned();
    let latitude: f64 = entry.get("lat")?.as_str()?.parse().ok()?;
    let longitude: f64 = entry.get("lon")?.as_str()?.parse().ok()?;
    if !latitude.is_finite() || !longitude.is_finite() {
        return None;
    }
    Some(Candidate {
        display_name,
        latitude,
        longitude,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn search_url_percent_encodes_the_query() {
        let geocoder = Geocoder::new("https://nominatim.openstreetmap.org/search");
        assert_eq!(
            geocoder.search_url("100 Main St"),
            "https://nominatim.openstreetmap.org/search?format=json&q=100%20Main%20St&limit=5"
        );
    }

    #[test]
    fn parses_well_formed_results() {
        let body = json!([
            {"display_name": "100 Main St, Springfield", "lat": "39.1", "lon": "-89.6"}
        ]);
        let candidates = parse_candidates(&body);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].display_name, "100 Main St, Springfield");
        assert_eq!(candidates[0].latitude, 39.1);
        assert_eq!(candidates[0].longitude, -89.6);
    }

    #[test]
    fn non_array_body_is_an_empty_list() {
        let body = json!({"error": "rate limited"});
        assert!(parse_candidates(&body).is_empty());
    }

    #[test]
    fn entries_with_bad_coordinates_are_skipped() {
        let body = json!([
            {"display_name": "good", "lat": "1.0", "lon": "2.0"},
            {"display_name": "bad", "lat": "north", "lon": "2.0"},
            {"lat": "1.0", "lon": "2.0"}
        ]);
        let candidates = parse_candidates(&body);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].display_name, "good");
    }

    #[test]
    fn result_list_is_capped() {
        let entries: Vec<Value> = (0..8)
            .map(|i| json!({"display_name": format!("hit {i}"), "lat": "1.0", "lon": "2.0"}))
            .collect();
        assert_eq!(parse_candidates(&Value::Array(entries)).len(), RESULT_LIMIT);
    }
}
