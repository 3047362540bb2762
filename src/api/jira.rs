//! Jira REST API v2 client.
//!
//! Authenticates with basic auth (account email + API token) on every
//! request, the scheme Jira Cloud uses for scripted access. Epic start
//! dates are not a fixed field in Jira, so creation resolves the field
//! id by display name first and silently skips the start date when the
//! instance has no such field.

use super::{Issue, IssueTracker, NewEpic, Project, Transition, User};
use crate::libs::config::Config;
use crate::libs::errors::RepicError;
use anyhow::Result;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};

const SEARCH_URL: &str = "rest/api/2/search";
const ISSUE_URL: &str = "rest/api/2/issue";
const FIELD_URL: &str = "rest/api/2/field";
const MYSELF_URL: &str = "rest/api/2/myself";
const PROJECT_URL: &str = "rest/api/2/project";

/// Display names under which Jira instances expose the epic start date.
const START_DATE_FIELD_NAMES: [&str; 3] = ["Start date", "Start Date", "startDate"];

#[derive(Deserialize, Debug)]
struct JiraSearchResults {
    issues: Vec<JiraIssue>,
}

#[derive(Deserialize, Debug)]
struct JiraIssue {
    key: String,
    fields: JiraIssueFields,
}

#[derive(Deserialize, Debug)]
struct JiraIssueFields {
    summary: String,
    status: JiraStatus,
}

#[derive(Deserialize, Debug)]
struct JiraStatus {
    name: String,
}

#[derive(Deserialize, Debug)]
struct JiraTransitionsResponse {
    transitions: Vec<JiraTransition>,
}

#[derive(Deserialize, Debug)]
struct JiraTransition {
    id: String,
    name: String,
}

#[derive(Deserialize, Debug)]
struct JiraField {
    id: String,
    name: String,
}

#[derive(Deserialize, Debug)]
struct JiraUser {
    #[serde(rename = "displayName")]
    display_name: String,
    #[serde(rename = "emailAddress")]
    email_address: Option<String>,
}

#[derive(Deserialize, Debug)]
struct JiraProject {
    key: String,
    name: String,
}

#[derive(Deserialize, Debug)]
struct CreatedIssue {
    key: String,
}

#[derive(Debug)]
pub struct Jira {
    client: Client,
    server: String,
    email: String,
    api_token: String,
}

impl Jira {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            server: config.server.clone(),
            email: config.email.clone(),
            api_token: config.api_token.clone(),
        }
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(format!("{}/{}", self.server, path)).basic_auth(&self.email, Some(&self.api_token))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.client.post(format!("{}/{}", self.server, path)).basic_auth(&self.email, Some(&self.api_token))
    }

    /// Sends a request, mapping transport failures to a network error,
    /// 401 to an authentication error and any other non-success status
    /// to an error carrying the response body.
    async fn send(request: RequestBuilder) -> Result<Response> {
        let res = request.send().await.map_err(RepicError::Network)?;
        match res.status() {
            StatusCode::UNAUTHORIZED => Err(RepicError::Authentication.into()),
            status if !status.is_success() => {
                let body = res.text().await.unwrap_or_default();
                anyhow::bail!("Jira returned {}: {}", status, body)
            }
            _ => Ok(res),
        }
    }

    /// Finds the id of the first custom field matching one of the given
    /// display names, if the instance has one.
    async fn find_field_id(&self, names: &[&str]) -> Result<Option<String>> {
        let fields = Self::send(self.get(FIELD_URL)).await?.json::<Vec<JiraField>>().await?;
        Ok(fields.into_iter().find(|f| names.contains(&f.name.as_str())).map(|f| f.id))
    }
}

impl IssueTracker for Jira {
    async fn search(&self, jql: &str, max_results: u32) -> Result<Vec<Issue>> {
        let request = self.get(SEARCH_URL).query(&[("jql", jql), ("maxResults", &max_results.to_string())]);
        let results = Self::send(request).await?.json::<JiraSearchResults>().await?;
        Ok(results
            .issues
            .into_iter()
            .map(|issue| Issue {
                key: issue.key,
                summary: issue.fields.summary,
                status: issue.fields.status.name,
            })
            .collect())
    }

    async fn create_epic(&self, epic: &NewEpic) -> Result<String> {
        let mut fields = json!({
            "project": { "key": epic.project_key },
            "summary": epic.summary,
            "description": epic.description,
            "issuetype": { "name": epic.issue_type },
            "priority": { "name": epic.priority },
        });

        let map = fields.as_object_mut().expect("fields is an object");
        if !epic.labels.is_empty() {
            map.insert("labels".to_string(), json!(epic.labels));
        }
        if !epic.components.is_empty() {
            let components: Vec<Value> = epic.components.iter().map(|c| json!({ "name": c })).collect();
            map.insert("components".to_string(), json!(components));
        }
        if let Some(due) = epic.due_date {
            map.insert("duedate".to_string(), json!(due.format("%Y-%m-%d").to_string()));
        }
        if let Some(start) = epic.start_date {
            if let Some(field_id) = self.find_field_id(&START_DATE_FIELD_NAMES).await? {
                map.insert(field_id, json!(start.format("%Y-%m-%d").to_string()));
            }
        }

        let request = self.post(ISSUE_URL).json(&json!({ "fields": fields }));
        let created = Self::send(request).await?.json::<CreatedIssue>().await?;
        Ok(created.key)
    }

    async fn transitions(&self, key: &str) -> Result<Vec<Transition>> {
        let request = self.get(&format!("{}/{}/transitions", ISSUE_URL, key));
        let response = Self::send(request).await?.json::<JiraTransitionsResponse>().await?;
        Ok(response.transitions.into_iter().map(|t| Transition { id: t.id, name: t.name }).collect())
    }

    async fn transition_issue(&self, key: &str, transition_id: &str) -> Result<()> {
        let body = json!({ "transition": { "id": transition_id } });
        Self::send(self.post(&format!("{}/{}/transitions", ISSUE_URL, key)).json(&body)).await?;
        Ok(())
    }

    async fn myself(&self) -> Result<User> {
        let user = Self::send(self.get(MYSELF_URL)).await?.json::<JiraUser>().await?;
        Ok(User {
            display_name: user.display_name,
            email: user.email_address,
        })
    }

    async fn project(&self, key: &str) -> Result<Project> {
        let project = Self::send(self.get(&format!("{}/{}", PROJECT_URL, key))).await?.json::<JiraProject>().await?;
        Ok(Project {
            key: project.key,
            name: project.name,
        })
    }
}
