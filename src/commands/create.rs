use crate::api::{IssueTracker, Jira};
use crate::libs::{
    config::Config,
    messages::Message,
    period::Period,
    template::Templates,
    view::View,
    workflow::{CloseOutcome, EpicOutcome, Workflow},
};
use crate::{msg_debug, msg_error, msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::path::Path;

#[derive(Debug, Args)]
pub struct CreateArgs {
    #[arg(short = 't', long = "templates", help = "Template names to create (defaults to all)")]
    templates: Vec<String>,
    #[arg(long, help = "Month number (1-12). Defaults to the current month")]
    month: Option<u32>,
    #[arg(long, help = "Year (e.g. 2026). Defaults to the current year")]
    year: Option<i32>,
    #[arg(long, help = "Create even if the epic already exists")]
    force: bool,
    #[arg(long = "no-close-previous", help = "Don't close previous month's epics")]
    no_close_previous: bool,
    #[arg(short = 'y', long = "yes", help = "Skip confirmation prompts")]
    yes: bool,
}

pub async fn cmd(args: CreateArgs, dry_run: bool) -> Result<()> {
    let config = Config::read()?;
    let templates = Templates::load(Path::new(&config.templates_file))?;
    msg_debug!(format!("Loaded {} template(s) from {}", templates.all().len(), config.templates_file));
    let period = super::preview::resolve_period(args.month, args.year)?;

    let names = if args.templates.is_empty() { templates.names() } else { args.templates.clone() };
    if names.is_empty() {
        msg_info!(Message::NoTemplatesFound);
        return Ok(());
    }

    let jira = Jira::new(&config);
    let workflow = Workflow::new(&jira, &config.project_key, dry_run);

    // Batch-level duplicate check: warn before creating into a month
    // that already has epics, unless the user pre-confirmed.
    if !dry_run && !args.yes {
        let existing = workflow.existing_for_period(&period).await?;
        if !existing.is_empty() && !confirm_existing(&existing, &period)? {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    msg_print!(Message::CreatingEpicsFor(period.month_name().to_string(), period.year), true);
    msg_print!(Message::PeriodStart(period.first_working_day.to_string()));
    msg_print!(Message::PeriodEnd(period.last_working_day.to_string()));

    if !args.no_close_previous {
        if dry_run {
            msg_print!(Message::DryRunWouldClosePrevious);
        } else {
            close_previous(&workflow, &templates, &names, &period).await;
        }
    }

    let mut selected = Vec::new();
    for name in &names {
        match templates.get(name) {
            Ok(template) => selected.push(template),
            Err(e) => msg_error!(Message::EpicCreateFailed(name.clone(), e.to_string())),
        }
    }

    let mut created = 0;
    for (name, outcome) in workflow.create_epics(&selected, &period, args.force).await {
        match outcome {
            Ok(EpicOutcome::Created { key, summary }) => {
                msg_success!(Message::EpicCreated(key, summary));
                created += 1;
            }
            Ok(EpicOutcome::Skipped { summary, .. }) => {
                msg_warning!(Message::EpicExistsSkipping(summary));
            }
            Ok(EpicOutcome::Previewed { rendered }) => {
                msg_print!(Message::DryRunWouldCreate(rendered.summary));
                msg_print!(Message::DryRunDates(rendered.start_date.to_string(), rendered.due_date.to_string()));
            }
            Err(e) => {
                msg_error!(Message::EpicCreateFailed(name, e.to_string()));
            }
        }
    }

    if !dry_run {
        msg_success!(Message::CreatedCount(created), true);
    }
    Ok(())
}

/// Closes last month's equivalent of each selected template, reporting
/// per-epic outcomes. Failures are warnings; the batch always proceeds.
async fn close_previous<T: IssueTracker>(workflow: &Workflow<'_, T>, templates: &Templates, names: &[String], period: &Period) {
    msg_print!(Message::ClosingPreviousEpics);

    let mut any_found = false;
    for name in names {
        let Ok(template) = templates.get(name) else { continue };
        match workflow.close_previous(template, period).await {
            Ok(outcomes) => {
                for outcome in outcomes {
                    any_found = true;
                    match outcome {
                        CloseOutcome::Closed { key, summary } => msg_success!(Message::EpicClosed(key, summary)),
                        CloseOutcome::Exhausted { key, status } => msg_warning!(Message::EpicCloseExhausted(key, status)),
                    }
                }
            }
            Err(e) => msg_error!(Message::EpicCloseFailed(name.clone(), e.to_string())),
        }
    }

    if !any_found {
        msg_info!(Message::NoPreviousEpicsFound);
    }
}

/// Lists the existing epics for the target period and asks whether to
/// proceed anyway. Declining aborts the whole batch.
fn confirm_existing(existing: &[crate::api::Issue], period: &Period) -> Result<bool> {
    msg_warning!(Message::ExistingEpicsFound(existing.len(), period.month_name().to_string(), period.year), true);
    View::issues(existing)?;

    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmCreateAnyway.to_string())
        .default(false)
        .interact()?)
}
