//! Typed error kinds for repic operations.
//!
//! Commands propagate errors with `anyhow`; this enum carries the cases
//! callers need to tell apart, mainly so a single failing template does
//! not abort the rest of the batch. Transition exhaustion is not an
//! error: it is a first-class outcome of the close workflow, reported
//! as a warning.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepicError {
    #[error("Missing required environment variables: {0}. Please create a .env file based on .env.example")]
    MissingEnvVars(String),

    #[error("Month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),

    #[error("Template '{0}' not found")]
    TemplateNotFound(String),

    #[error("Jira authentication failed (401). Check JIRA_EMAIL and JIRA_API_TOKEN")]
    Authentication,

    #[error("Jira request failed: {0}")]
    Network(#[from] reqwest::Error),
}
