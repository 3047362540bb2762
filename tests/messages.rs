#[cfg(test)]
mod tests {
    use repic::libs::messages::Message;

    #[test]
    fn test_connected_as_with_and_without_email() {
        let msg = Message::ConnectedAs("Test Bot".to_string(), Some("bot@example.com".to_string()));
        assert_eq!(msg.to_string(), "Logged in as Test Bot <bot@example.com>");

        let msg = Message::ConnectedAs("Test Bot".to_string(), None);
        assert_eq!(msg.to_string(), "Logged in as Test Bot");
    }

    #[test]
    fn test_counts_are_interpolated() {
        assert_eq!(Message::CreatedCount(3).to_string(), "Created 3 epic(s)");
        let msg = Message::ExistingEpicsFound(2, "February".to_string(), 2026);
        assert_eq!(msg.to_string(), "Warning: Found 2 existing epic(s) for February 2026:");
    }
}
