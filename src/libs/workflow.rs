//! The monthly epic lifecycle.
//!
//! For each template the orchestrator resolves the target period,
//! renders the epic, checks the tracker for a duplicate, optionally
//! closes the previous month's equivalent epic and finally creates the
//! new one. Each attempt walks
//! `Resolved -> Rendered -> Checked -> {Skipped | Created}`, with
//! closing running independently as
//! `Found -> TransitionAttempted -> {Closed | ExhaustedFallbacks}`.
//!
//! The orchestrator never prints; it returns outcome values and the
//! commands decide how to report them. In dry-run mode no create or
//! transition call is ever issued.

use crate::api::{Issue, IssueTracker, NewEpic};
use crate::libs::period::Period;
use crate::libs::render::{self, RenderedEpic};
use crate::libs::template::EpicTemplate;
use crate::libs::transition::pick_close_transition;
use anyhow::Result;

const SEARCH_LIMIT: u32 = 100;

/// How one epic-creation attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EpicOutcome {
    /// The epic was created in the tracker.
    Created { key: String, summary: String },
    /// An epic with the same summary already exists and `force` was off.
    Skipped { existing_key: String, summary: String },
    /// Dry-run: the epic would have been created.
    Previewed { rendered: RenderedEpic },
}

/// How closing one previous-month epic ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseOutcome {
    Closed { key: String, summary: String },
    /// None of the fallback transition names was offered by the server.
    Exhausted { key: String, status: String },
}

/// Drives the epic lifecycle against an [`IssueTracker`].
pub struct Workflow<'a, T: IssueTracker> {
    tracker: &'a T,
    project_key: &'a str,
    dry_run: bool,
}

impl<'a, T: IssueTracker> Workflow<'a, T> {
    pub fn new(tracker: &'a T, project_key: &'a str, dry_run: bool) -> Self {
        Self { tracker, project_key, dry_run }
    }

    /// Renders a template for the period and creates the epic unless a
    /// duplicate exists (and `force` is off) or dry-run is active.
    pub async fn create_epic(&self, template: &EpicTemplate, period: &Period, force: bool) -> Result<EpicOutcome> {
        let rendered = render::render(template, period);

        if self.dry_run {
            return Ok(EpicOutcome::Previewed { rendered });
        }

        if !force {
            if let Some(existing) = self.find_existing(&rendered.summary).await? {
                return Ok(EpicOutcome::Skipped {
                    existing_key: existing.key,
                    summary: rendered.summary,
                });
            }
        }

        let key = self.tracker.create_epic(&self.to_new_epic(&rendered)).await?;
        Ok(EpicOutcome::Created { key, summary: rendered.summary })
    }

    /// Processes a batch of templates in order, pairing each template
    /// name with its outcome. A failure for one template is captured in
    /// its slot and the batch continues; nothing is rolled back.
    pub async fn create_epics(&self, templates: &[&EpicTemplate], period: &Period, force: bool) -> Vec<(String, Result<EpicOutcome>)> {
        let mut results = Vec::with_capacity(templates.len());
        for template in templates {
            let outcome = self.create_epic(template, period, force).await;
            results.push((template.name.clone(), outcome));
        }
        results
    }

    /// Finds the previous month's equivalent of a template's epic that
    /// is still open, and moves each through the transition fallback
    /// list. Exhaustion is reported per epic, never as an error.
    pub async fn close_previous(&self, template: &EpicTemplate, period: &Period) -> Result<Vec<CloseOutcome>> {
        let previous = period.previous()?;
        let summary = render::substitute(&template.summary, &previous);

        let jql = format!(
            r#"project = "{}" AND issuetype = Epic AND summary ~ "\"{}\"" AND status != Done AND status != Closed"#,
            self.project_key,
            escape_jql(&summary)
        );
        let issues = self.tracker.search(&jql, SEARCH_LIMIT).await?;

        let mut outcomes = Vec::new();
        for issue in issues.into_iter().filter(|i| i.summary == summary) {
            outcomes.push(self.close_issue(issue).await?);
        }
        Ok(outcomes)
    }

    /// Lists epics already carrying the period's month marker, used for
    /// the pre-flight duplicate warning before a batch run.
    pub async fn existing_for_period(&self, period: &Period) -> Result<Vec<Issue>> {
        let suffix = period.suffix();
        let jql = format!(
            r#"project = "{}" AND issuetype = Epic AND summary ~ "{}""#,
            self.project_key,
            escape_jql(&suffix)
        );
        let issues = self.tracker.search(&jql, SEARCH_LIMIT).await?;
        // The ~ operator is a fuzzy match; keep only true period matches.
        Ok(issues.into_iter().filter(|i| i.summary.contains(&suffix)).collect())
    }

    async fn find_existing(&self, summary: &str) -> Result<Option<Issue>> {
        let jql = format!(
            r#"project = "{}" AND issuetype = Epic AND summary ~ "\"{}\"""#,
            self.project_key,
            escape_jql(summary)
        );
        let issues = self.tracker.search(&jql, 10).await?;
        Ok(issues.into_iter().find(|i| i.summary == summary))
    }

    async fn close_issue(&self, issue: Issue) -> Result<CloseOutcome> {
        let available = self.tracker.transitions(&issue.key).await?;
        match pick_close_transition(&available) {
            Some(transition) => {
                self.tracker.transition_issue(&issue.key, &transition.id).await?;
                Ok(CloseOutcome::Closed {
                    key: issue.key,
                    summary: issue.summary,
                })
            }
            None => Ok(CloseOutcome::Exhausted {
                key: issue.key,
                status: issue.status,
            }),
        }
    }

    fn to_new_epic(&self, rendered: &RenderedEpic) -> NewEpic {
        NewEpic {
            project_key: self.project_key.to_string(),
            summary: rendered.summary.clone(),
            description: rendered.description.clone(),
            labels: rendered.labels.clone(),
            components: rendered.components.clone(),
            priority: rendered.priority.clone(),
            issue_type: rendered.issue_type.clone(),
            start_date: Some(rendered.start_date),
            due_date: Some(rendered.due_date),
        }
    }
}

/// Escapes backslashes and quotes for embedding in a JQL string literal.
fn escape_jql(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
