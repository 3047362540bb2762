use crate::libs::{config::Config, messages::Message, template::Templates, view::View};
use crate::{msg_info, msg_print};
use anyhow::Result;
use std::path::Path;

pub fn cmd() -> Result<()> {
    let templates = Templates::load(Path::new(&Config::templates_path()))?;

    if templates.is_empty() {
        msg_info!(Message::NoTemplatesFound);
        return Ok(());
    }

    msg_print!(Message::TemplateListHeader, true);
    View::templates(templates.all())?;
    Ok(())
}
