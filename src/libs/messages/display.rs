//! Display implementation converting [`Message`] variants into the text
//! printed to the terminal. All user-facing wording lives here.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            // === CREATE MESSAGES ===
            Message::CreatingEpicsFor(month, year) => format!("Creating epics for {} {}", month, year),
            Message::PeriodStart(date) => format!("Start date: {} (first working day)", date),
            Message::PeriodEnd(date) => format!("End date: {} (last working day)", date),
            Message::EpicCreated(key, summary) => format!("Created epic: {} - {}", key, summary),
            Message::EpicExistsSkipping(summary) => format!("Skipping: Epic already exists: {}", summary),
            Message::EpicCreateFailed(name, error) => format!("Error creating {}: {}", name, error),
            Message::DryRunWouldCreate(summary) => format!("[DRY RUN] Would create epic: {}", summary),
            Message::DryRunDates(start, end) => format!("[DRY RUN]   Start: {}, End: {}", start, end),
            Message::CreatedCount(count) => format!("Created {} epic(s)", count),

            // === DUPLICATE CONFIRMATION MESSAGES ===
            Message::ExistingEpicsFound(count, month, year) => {
                format!("Warning: Found {} existing epic(s) for {} {}:", count, month, year)
            }
            Message::ConfirmCreateAnyway => "Create new epics anyway? (This may create duplicates)".to_string(),
            Message::OperationCancelled => "Aborted.".to_string(),

            // === CLOSE PREVIOUS MESSAGES ===
            Message::ClosingPreviousEpics => "Closing previous month's epics...".to_string(),
            Message::DryRunWouldClosePrevious => "[DRY RUN] Would close previous month's epics".to_string(),
            Message::NoPreviousEpicsFound => "No previous month epics found to close.".to_string(),
            Message::EpicClosed(key, summary) => format!("Closed: {} - {}", key, summary),
            Message::EpicCloseExhausted(key, status) => {
                format!("Could not close: {} (still '{}', may need manual transition)", key, status)
            }
            Message::EpicCloseFailed(name, error) => format!("Error closing previous epic for {}: {}", name, error),

            // === TEMPLATE MESSAGES ===
            Message::TemplateListHeader => "📋 Available Epic Templates".to_string(),
            Message::NoTemplatesFound => "No templates found.".to_string(),
            Message::PreviewHeader(name) => format!("Preview of '{}'", name),
            Message::PreviewSummary(summary) => format!("Summary: {}", summary),
            Message::PreviewPriority(priority) => format!("Priority: {}", priority),
            Message::PreviewLabels(labels) => format!("Labels: {}", labels),
            Message::PreviewDescription(description) => format!("Description:\n{}", description),

            // === CONNECTION MESSAGES ===
            Message::ConnectingTo(server) => format!("Connecting to {}...", server),
            Message::ConnectionSuccessful => "Connection successful!".to_string(),
            Message::ConnectedAs(name, email) => match email {
                Some(email) => format!("Logged in as {} <{}>", name, email),
                None => format!("Logged in as {}", name),
            },
            Message::ConnectionFailed => "Connection failed".to_string(),
            Message::ConnectedProject(name, key) => format!("Project: {} ({})", name, key),
        };
        write!(f, "{}", msg)
    }
}
