//! Close-transition selection for previous-month epics.
//!
//! Jira workflows differ in what the "finish" transition is called, so
//! closing an epic tries an ordered list of known names until one is
//! offered by the server. Selection is a pure function over the
//! transitions the server reports, kept separate from the network call
//! so the fallback order can be tested without a live tracker.

use crate::api::Transition;

/// Candidate transition names, tried in order. Matching is case-insensitive.
pub const CLOSE_TRANSITION_NAMES: [&str; 7] = ["done", "close", "closed", "complete", "completed", "resolve", "resolved"];

/// Picks the first available transition whose name matches a known
/// close transition, preserving the candidate order.
///
/// Returns `None` when the fallback list is exhausted; the caller
/// reports that as a warning, not a failure.
pub fn pick_close_transition(available: &[Transition]) -> Option<&Transition> {
    for candidate in CLOSE_TRANSITION_NAMES {
        if let Some(transition) = available.iter().find(|t| t.name.eq_ignore_ascii_case(candidate)) {
            return Some(transition);
        }
    }
    None
}
