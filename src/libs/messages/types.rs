//! All user-facing messages, grouped by workflow area.
//!
//! Keeping message text behind one enum keeps terminal output consistent
//! and makes the text testable independently of the commands that emit it.

#[derive(Debug, Clone)]
pub enum Message {
    // === CREATE MESSAGES ===
    CreatingEpicsFor(String, i32),  // month name, year
    PeriodStart(String),            // first working day
    PeriodEnd(String),              // last working day
    EpicCreated(String, String),    // key, summary
    EpicExistsSkipping(String),     // summary
    EpicCreateFailed(String, String), // template name, error
    DryRunWouldCreate(String),      // summary
    DryRunDates(String, String),    // start, end
    CreatedCount(usize),

    // === DUPLICATE CONFIRMATION MESSAGES ===
    ExistingEpicsFound(usize, String, i32), // count, month name, year
    ConfirmCreateAnyway,
    OperationCancelled,

    // === CLOSE PREVIOUS MESSAGES ===
    ClosingPreviousEpics,
    DryRunWouldClosePrevious,
    NoPreviousEpicsFound,
    EpicClosed(String, String),      // key, summary
    EpicCloseExhausted(String, String), // key, current status
    EpicCloseFailed(String, String), // template name, error

    // === TEMPLATE MESSAGES ===
    TemplateListHeader,
    NoTemplatesFound,
    PreviewHeader(String),       // template name
    PreviewSummary(String),
    PreviewPriority(String),
    PreviewLabels(String),
    PreviewDescription(String),

    // === CONNECTION MESSAGES ===
    ConnectingTo(String), // server url
    ConnectionSuccessful,
    ConnectedAs(String, Option<String>), // display name, email
    ConnectionFailed,
    ConnectedProject(String, String), // project name, key
}
