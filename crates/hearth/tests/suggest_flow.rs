//! End-to-end flow of the address autocomplete: keystrokes, debounce,
//! lookup parsing, stale-response handling, and selection.

use std::time::{Duration, Instant};

use hearth::app::suggest::{AddressSearch, DEBOUNCE_DELAY, LookupOutcome};
use hearth::infra::geocoder::{Geocoder, parse_candidates};

fn after_quiet_period() -> Instant {
    Instant::now() + DEBOUNCE_DELAY + Duration::from_millis(50)
}

#[test]
fn typing_then_waiting_issues_exactly_one_encoded_request() {
    let mut search = AddressSearch::new();
    let text = "100 Main St";
    for len in 1..=text.len() {
        search.on_query_change(&text[..len]);
    }

    // Inside the quiet window nothing fires.
    assert_eq!(search.poll_due(Instant::now()), None);

    // After the window, only the final query is issued, exactly once.
    assert_eq!(
        search.poll_due(after_quiet_period()),
        Some("100 Main St".to_owned())
    );
    assert_eq!(search.poll_due(after_quiet_period()), None);

    let geocoder = Geocoder::new("https://nominatim.openstreetmap.org/search");
    assert_eq!(
        geocoder.search_url("100 Main St"),
        "https://nominatim.openstreetmap.org/search?format=json&q=100%20Main%20St&limit=5"
    );
}

#[test]
fn sample_response_flows_through_to_selection() {
    let mut search = AddressSearch::new();
    search.on_query_change("100 Main St");
    let query = search.poll_due(after_quiet_period()).expect("fired");

    let body = serde_json::json!([
        {"display_name": "100 Main St, Springfield", "lat": "39.1", "lon": "-89.6"}
    ]);
    search.apply(LookupOutcome {
        query,
        candidates: parse_candidates(&body),
    });

    assert_eq!(search.candidates().len(), 1);
    assert_eq!(search.candidates()[0].latitude, 39.1);

    let picked = search.select(0).expect("candidate available");
    assert_eq!(picked.display_name, "100 Main St, Springfield");
    assert_eq!(search.query(), "100 Main St, Springfield");
    assert!(!search.panel_visible());
    // The mirrored label never schedules a lookup of its own.
    assert!(!search.has_pending_fire());
}

#[test]
fn late_response_for_a_superseded_query_is_discarded() {
    let mut search = AddressSearch::new();

    search.on_query_change("100 M");
    let first = search.poll_due(after_quiet_period()).expect("first fired");

    search.on_query_change("100 Main St");
    let second = search.poll_due(after_quiet_period()).expect("second fired");

    // The newer lookup completes first.
    search.apply(LookupOutcome {
        query: second,
        candidates: parse_candidates(&serde_json::json!([
            {"display_name": "100 Main St, Springfield", "lat": "39.1", "lon": "-89.6"}
        ])),
    });
    // The older one limps in afterwards and must be ignored.
    search.apply(LookupOutcome {
        query: first,
        candidates: parse_candidates(&serde_json::json!([
            {"display_name": "100 Mill Ln, Shelbyville", "lat": "40.0", "lon": "-90.0"}
        ])),
    });

    assert_eq!(search.candidates().len(), 1);
    assert_eq!(search.candidates()[0].display_name, "100 Main St, Springfield");
}

#[test]
fn malformed_body_degrades_to_no_suggestions() {
    let mut search = AddressSearch::new();
    search.on_query_change("100 Main St");
    let query = search.poll_due(after_quiet_period()).expect("fired");

    search.apply(LookupOutcome {
        query,
        candidates: parse_candidates(&serde_json::json!({"unexpected": "object"})),
    });

    assert!(search.candidates().is_empty());
    assert!(!search.is_loading());
}

#[test]
fn clearing_the_input_clears_the_candidates_without_a_request() {
    let mut search = AddressSearch::new();
    search.on_query_change("100 Main St");
    let query = search.poll_due(after_quiet_period()).expect("fired");
    search.apply(LookupOutcome {
        query,
        candidates: parse_candidates(&serde_json::json!([
            {"display_name": "100 Main St, Springfield", "lat": "39.1", "lon": "-89.6"}
        ])),
    });
    assert_eq!(search.candidates().len(), 1);

    search.on_query_change("");
    assert_eq!(search.poll_due(after_quiet_period()), None);
    assert!(search.candidates().is_empty());
}
