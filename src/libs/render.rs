//! Token substitution for epic templates.
//!
//! Rendering is pure text replacement: every recognized `{token}` in a
//! template string is replaced with the value derived from the target
//! period. Unrecognized tokens are left verbatim so a typo in a template
//! shows up in the preview instead of failing the run. Rendering the
//! same template for the same period always produces identical output.
//!
//! Supported tokens:
//!
//! | Token          | Example for March 2026 |
//! |----------------|------------------------|
//! | `{month}`      | `03`                   |
//! | `{month_name}` | `March`                |
//! | `{month_short}`| `Mar`                  |
//! | `{year}`       | `2026`                 |
//! | `{year_short}` | `26`                   |
//! | `{quarter}`    | `Q1`                   |

use crate::libs::period::Period;
use crate::libs::template::EpicTemplate;
use chrono::NaiveDate;

/// A template rendered for a concrete period, ready to drive a create call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEpic {
    pub template_name: String,
    pub summary: String,
    pub description: String,
    pub labels: Vec<String>,
    pub components: Vec<String>,
    pub priority: String,
    pub issue_type: String,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
}

/// Replaces all recognized `{token}` occurrences with period values.
pub fn substitute(text: &str, period: &Period) -> String {
    text.replace("{month}", &format!("{:02}", period.month))
        .replace("{month_name}", period.month_name())
        .replace("{month_short}", period.month_short())
        .replace("{year}", &period.year.to_string())
        .replace("{year_short}", &period.year_short())
        .replace("{quarter}", &period.quarter())
}

/// Renders a template against a resolved period.
pub fn render(template: &EpicTemplate, period: &Period) -> RenderedEpic {
    RenderedEpic {
        template_name: template.name.clone(),
        summary: substitute(&template.summary, period),
        description: substitute(&template.description, period),
        labels: template.labels.clone(),
        components: template.components.clone(),
        priority: template.priority.clone(),
        issue_type: template.issue_type.clone(),
        start_date: period.first_working_day,
        due_date: period.last_working_day,
    }
}
