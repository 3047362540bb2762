use crate::api::Issue;
use crate::libs::template::EpicTemplate;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn templates(templates: &[EpicTemplate]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["NAME", "SUMMARY TEMPLATE", "LABELS", "PRIORITY"]);
        for template in templates {
            table.add_row(row![
                template.name,
                truncate(&template.summary, 50),
                template.labels.join(", "),
                template.priority
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn issues(issues: &[Issue]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["KEY", "SUMMARY", "STATUS"]);
        for issue in issues {
            table.add_row(row![issue.key, truncate(&issue.summary, 60), issue.status]);
        }
        table.printstd();

        Ok(())
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        format!("{}...", text.chars().take(max).collect::<String>())
    } else {
        text.to_string()
    }
}
