//! Epic template loading and lookup.
//!
//! Templates are declared once in a JSON file and are immutable for the
//! lifetime of the process. Each template carries the text patterns and
//! issue metadata needed to create one recurring epic; the `{token}`
//! placeholders are resolved by [`crate::libs::render`].
//!
//! File format:
//!
//! ```json
//! {
//!   "templates": [
//!     {
//!       "name": "meetings",
//!       "summary": "Meetings - CC Gantt - {month_short}'{year_short}",
//!       "description": "Recurring meetings for {month_name} {year}",
//!       "labels": ["recurring", "meetings"],
//!       "priority": "Medium"
//!     }
//!   ]
//! }
//! ```

use crate::libs::errors::RepicError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_priority() -> String {
    "Medium".to_string()
}

fn default_issue_type() -> String {
    "Epic".to_string()
}

/// A named, reusable pattern for one recurring epic.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct EpicTemplate {
    pub name: String,
    pub summary: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub components: Vec<String>,
    #[serde(default = "default_priority")]
    pub priority: String,
    #[serde(default = "default_issue_type")]
    pub issue_type: String,
}

#[derive(Deserialize, Debug)]
struct TemplateFile {
    #[serde(default)]
    templates: Vec<EpicTemplate>,
}

/// The template set loaded at startup, read-only afterwards.
#[derive(Debug, Clone)]
pub struct Templates {
    templates: Vec<EpicTemplate>,
}

impl Templates {
    /// Loads all templates from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| format!("Failed to read template file {}", path.display()))?;
        let file: TemplateFile = serde_json::from_str(&contents).with_context(|| format!("Failed to parse template file {}", path.display()))?;
        Ok(Self { templates: file.templates })
    }

    pub fn get(&self, name: &str) -> Result<&EpicTemplate, RepicError> {
        self.templates.iter().find(|t| t.name == name).ok_or_else(|| RepicError::TemplateNotFound(name.to_string()))
    }

    pub fn all(&self) -> &[EpicTemplate] {
        &self.templates
    }

    pub fn names(&self) -> Vec<String> {
        self.templates.iter().map(|t| t.name.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
