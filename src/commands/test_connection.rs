use crate::api::{IssueTracker, Jira};
use crate::libs::{config::Config, messages::Message};
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    msg_print!(Message::ConnectingTo(config.server.clone()));

    let jira = Jira::new(&config);
    match jira.myself().await {
        Ok(user) => {
            msg_success!(Message::ConnectionSuccessful);
            msg_print!(Message::ConnectedAs(user.display_name, user.email));
            let project = jira.project(&config.project_key).await?;
            msg_print!(Message::ConnectedProject(project.name, project.key));
        }
        Err(e) => {
            msg_error!(Message::ConnectionFailed);
            return Err(e);
        }
    }
    Ok(())
}
