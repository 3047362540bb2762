use crate::libs::{
    config::Config,
    messages::Message,
    period::Period,
    render,
    template::Templates,
};
use crate::msg_print;
use anyhow::Result;
use clap::Args;
use std::path::Path;

#[derive(Debug, Args)]
pub struct PreviewArgs {
    #[arg(help = "Template name to preview")]
    template_name: String,
    #[arg(long, help = "Month number (1-12). Defaults to the current month")]
    month: Option<u32>,
    #[arg(long, help = "Year (e.g. 2026). Defaults to the current year")]
    year: Option<i32>,
}

pub fn cmd(args: PreviewArgs) -> Result<()> {
    let templates = Templates::load(Path::new(&Config::templates_path()))?;
    let template = templates.get(&args.template_name)?;

    let period = resolve_period(args.month, args.year)?;
    let rendered = render::render(template, &period);

    msg_print!(Message::PreviewHeader(template.name.clone()), true);
    msg_print!(Message::PreviewSummary(rendered.summary));
    msg_print!(Message::PreviewPriority(rendered.priority));
    msg_print!(Message::PreviewLabels(rendered.labels.join(", ")));
    msg_print!(Message::PeriodStart(rendered.start_date.to_string()));
    msg_print!(Message::PeriodEnd(rendered.due_date.to_string()));
    msg_print!(Message::PreviewDescription(rendered.description), true);
    Ok(())
}

/// Fills missing month/year from the current date, validating the range.
pub fn resolve_period(month: Option<u32>, year: Option<i32>) -> Result<Period> {
    match (month, year) {
        (None, None) => Ok(Period::current()?),
        (m, y) => {
            let current = Period::current()?;
            Ok(Period::resolve(m.unwrap_or(current.month), y.unwrap_or(current.year))?)
        }
    }
}
