#[cfg(test)]
mod tests {
    use repic::api::Transition;
    use repic::libs::transition::{pick_close_transition, CLOSE_TRANSITION_NAMES};

    fn transition(id: &str, name: &str) -> Transition {
        Transition {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_picks_matching_transition() {
        let available = vec![transition("11", "To Do"), transition("31", "Done")];
        let picked = pick_close_transition(&available).unwrap();
        assert_eq!(picked.id, "31");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let available = vec![transition("41", "RESOLVED")];
        let picked = pick_close_transition(&available).unwrap();
        assert_eq!(picked.id, "41");
    }

    #[test]
    fn test_candidate_order_wins_over_server_order() {
        // "done" comes before "resolve" in the fallback list even though
        // the server lists them the other way round.
        let available = vec![transition("41", "Resolve"), transition("31", "Done")];
        let picked = pick_close_transition(&available).unwrap();
        assert_eq!(picked.id, "31");
    }

    #[test]
    fn test_exhausted_when_nothing_matches() {
        let available = vec![transition("11", "To Do"), transition("21", "In Progress")];
        assert!(pick_close_transition(&available).is_none());
        assert!(pick_close_transition(&[]).is_none());
    }

    #[test]
    fn test_every_candidate_name_is_recognized() {
        for name in CLOSE_TRANSITION_NAMES {
            let available = vec![transition("1", name)];
            assert!(pick_close_transition(&available).is_some(), "candidate '{}' not matched", name);
        }
    }
}
