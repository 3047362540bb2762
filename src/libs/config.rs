//! Environment-based configuration for the Jira connection.
//!
//! Credentials are supplied through environment variables, optionally
//! loaded from a `.env` file in the working directory. Configuration is
//! read once at startup and fails fast, naming every missing variable
//! at once rather than the first one found.
//!
//! Required variables:
//!
//! - `JIRA_SERVER` - base URL of the Jira instance
//! - `JIRA_EMAIL` - account email for basic auth
//! - `JIRA_API_TOKEN` - API token paired with the email
//! - `JIRA_PROJECT_KEY` - project the epics are created in
//!
//! Optional variables:
//!
//! - `REPIC_TEMPLATES` - path to the template file (default `templates.json`)

use crate::libs::errors::RepicError;
use anyhow::Result;
use std::env;

pub const DEFAULT_TEMPLATES_FILE: &str = "templates.json";

/// Jira connection and project settings.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: String,
    pub email: String,
    pub api_token: String,
    pub project_key: String,
    pub templates_file: String,
}

impl Config {
    /// Loads configuration from the environment, reading `.env` first.
    pub fn read() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_env()
    }

    /// Loads configuration from already-set environment variables.
    pub fn from_env() -> Result<Self> {
        let mut missing = Vec::new();
        let server = require_var("JIRA_SERVER", &mut missing);
        let email = require_var("JIRA_EMAIL", &mut missing);
        let api_token = require_var("JIRA_API_TOKEN", &mut missing);
        let project_key = require_var("JIRA_PROJECT_KEY", &mut missing);

        if !missing.is_empty() {
            return Err(RepicError::MissingEnvVars(missing.join(", ")).into());
        }

        Ok(Self {
            server: server.trim_end_matches('/').to_string(),
            email,
            api_token,
            project_key,
            templates_file: env::var("REPIC_TEMPLATES").unwrap_or_else(|_| DEFAULT_TEMPLATES_FILE.to_string()),
        })
    }

    /// Path to the template file, usable without Jira credentials so
    /// offline commands like `list-templates` and `preview` still work.
    pub fn templates_path() -> String {
        dotenv::dotenv().ok();
        env::var("REPIC_TEMPLATES").unwrap_or_else(|_| DEFAULT_TEMPLATES_FILE.to_string())
    }
}

fn require_var(name: &'static str, missing: &mut Vec<&'static str>) -> String {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => {
            missing.push(name);
            String::new()
        }
    }
}
