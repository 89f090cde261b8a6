//! Debounced address suggestions for the listing form.
//!
//! Keystrokes re-arm a single debounce deadline; when the deadline passes
//! with no further input, exactly one lookup is dispatched to a worker
//! thread for the query text current at that moment. Outcomes come back
//! through a channel tagged with the query they were issued for, and an
//! outcome is applied only while its tag still equals the live query, so a
//! slow response for a superseded query can never clobber a newer result.

use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;
use std::time::{Duration, Instant};

use crate::domain::model::Candidate;
use crate::infra::geocoder::Geocoder;

/// Quiet period after the last keystroke before a lookup is issued.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(500);

/// Result of one background lookup, tagged with its originating query.
#[derive(Debug, Clone)]
pub struct LookupOutcome {
    pub query: String,
    pub candidates: Vec<Candidate>,
}

/// State machine behind the address autocomplete panel.
#[derive(Debug)]
pub struct AddressSearch {
    query: String,
    candidates: Vec<Candidate>,
    deadline: Option<Instant>,
    loading: bool,
    panel_visible: bool,
    outcome_tx: Sender<LookupOutcome>,
    outcome_rx: Receiver<LookupOutcome>,
}

impl Default for AddressSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressSearch {
    pub fn new() -> Self {
        let (outcome_tx, outcome_rx) = channel();
        Self {
            query: String::new(),
            candidates: Vec::new(),
            deadline: None,
            loading: false,
            panel_visible: false,
            outcome_tx,
            outcome_rx,
        }
    }

    /// Record a new query string, reveal the panel, and re-arm the debounce
    /// deadline. Re-arming discards the previous not-yet-fired deadline; no
    /// request goes out until the quiet period elapses.
    pub fn on_query_change(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.panel_visible = true;
        self.deadline = Some(Instant::now() + DEBOUNCE_DELAY);
    }

    /// Check the debounce deadline. Returns the query to look up when the
    /// quiet period has elapsed; an empty or whitespace-only query clears
    /// the candidate list instead and nothing is issued.
    pub fn poll_due(&mut self, now: Instant) -> Option<String> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                if self.query.trim().is_empty() {
                    self.candidates.clear();
                    self.loading = false;
                    None
                } else {
                    self.loading = true;
                    Some(self.query.clone())
                }
            }
            _ => None,
        }
    }

    /// Run one lookup on a worker thread. The outcome is delivered through
    /// the engine's channel and picked up by [`AddressSearch::drain`].
    pub fn dispatch(&self, query: String, geocoder: &Geocoder) {
        let tx = self.outcome_tx.clone();
        let geocoder = geocoder.clone();
        thread::spawn(move || {
            let candidates = match geocoder.search(&query) {
                Ok(found) => found,
                Err(err) => {
                    tracing::warn!(error = %err, query = %query, "address lookup failed");
                    Vec::new()
                }
            };
            if tx.send(LookupOutcome { query, candidates }).is_err() {
                tracing::debug!("suggestion consumer went away before the lookup finished");
            }
        });
    }

    /// Apply a lookup outcome. Discarded when its query tag no longer
    /// matches the live query, whatever order responses arrive in.
    pub fn apply(&mut self, outcome: LookupOutcome) {
        if outcome.query != self.query {
            return;
        }
        self.loading = false;
        self.candidates = outcome.candidates;
    }

    /// Apply any outcomes that arrived since the last tick.
    pub fn drain(&mut self) {
        let pending: Vec<LookupOutcome> = self.outcome_rx.try_iter().collect();
        for outcome in pending {
            self.apply(outcome);
        }
    }

    /// One event-loop step: pick up finished lookups, then fire the debounce
    /// if it is due.
    pub fn tick(&mut self, now: Instant, geocoder: &Geocoder) {
        self.drain();
        if let Some(query) = self.poll_due(now) {
            self.dispatch(query, geocoder);
        }
    }

    /// Take the candidate at `index`: its display label becomes the visible
    /// search text and the panel is hidden. Purely local; the armed deadline
    /// is dropped so the mirrored label never triggers a lookup of its own.
    pub fn select(&mut self, index: usize) -> Option<Candidate> {
        let candidate = self.candidates.get(index)?.clone();
        self.query = candidate.display_name.clone();
        self.panel_visible = false;
        self.deadline = None;
        self.loading = false;
        Some(candidate)
    }

    /// Hide the panel without touching the query text.
    pub fn dismiss(&mut self) {
        self.panel_visible = false;
    }

    /// Show the panel again, e.g. when the address input regains focus.
    pub fn reveal(&mut self) {
        self.panel_visible = true;
    }

    /// Teardown when the hosting form goes away: the armed deadline is
    /// discarded and any in-flight worker result dies on the stale-query
    /// guard (or the closed channel).
    pub fn cancel(&mut self) {
        self.deadline = None;
        self.loading = false;
        self.panel_visible = false;
        self.query.clear();
        self.candidates.clear();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn panel_visible(&self) -> bool {
        self.panel_visible
    }

    pub fn has_pending_fire(&self) -> bool {
        self.deadline.is_some()
    }
}
