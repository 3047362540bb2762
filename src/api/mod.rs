//! API client for the external issue tracker.
//!
//! The workflow layer talks to the tracker through the [`IssueTracker`]
//! trait so the epic lifecycle can be exercised against a mock in tests.
//! The only production implementation is the [`jira::Jira`] REST client.

use anyhow::Result;
use chrono::NaiveDate;

pub mod jira;

pub use jira::Jira;

/// A remote issue as this tool sees it: key, summary, current status.
/// The record itself is owned entirely by the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub key: String,
    pub summary: String,
    pub status: String,
}

/// A workflow transition offered by the tracker for a specific issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub id: String,
    pub name: String,
}

/// The authenticated account, used for connectivity checks.
#[derive(Debug, Clone)]
pub struct User {
    pub display_name: String,
    pub email: Option<String>,
}

/// Project metadata.
#[derive(Debug, Clone)]
pub struct Project {
    pub key: String,
    pub name: String,
}

/// Field values for an epic about to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEpic {
    pub project_key: String,
    pub summary: String,
    pub description: String,
    pub labels: Vec<String>,
    pub components: Vec<String>,
    pub priority: String,
    pub issue_type: String,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
}

/// Operations the epic workflow needs from the tracker.
///
/// Kept minimal on purpose: search by JQL, create, list and apply
/// transitions, plus the two read-only calls the `test-connection`
/// command uses.
#[allow(async_fn_in_trait)]
pub trait IssueTracker {
    /// Runs a JQL search and returns matching issues.
    async fn search(&self, jql: &str, max_results: u32) -> Result<Vec<Issue>>;

    /// Creates an epic and returns its new issue key.
    async fn create_epic(&self, epic: &NewEpic) -> Result<String>;

    /// Lists the transitions currently available for an issue.
    async fn transitions(&self, key: &str) -> Result<Vec<Transition>>;

    /// Applies a transition to an issue.
    async fn transition_issue(&self, key: &str, transition_id: &str) -> Result<()>;

    /// Returns the authenticated user.
    async fn myself(&self) -> Result<User>;

    /// Returns project metadata.
    async fn project(&self, key: &str) -> Result<Project>;
}
