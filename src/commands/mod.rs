pub mod create;
pub mod list_templates;
pub mod preview;
pub mod test_connection;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Create monthly recurring epics")]
    Create(create::CreateArgs),
    #[command(about = "List all available epic templates")]
    ListTemplates,
    #[command(about = "Preview what an epic will look like", arg_required_else_help = true)]
    Preview(preview::PreviewArgs),
    #[command(about = "Test the Jira connection")]
    TestConnection,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[arg(long, global = true, help = "Preview changes without creating issues")]
    dry_run: bool,
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Create(args) => create::cmd(args, cli.dry_run).await,
            Commands::ListTemplates => list_templates::cmd(),
            Commands::Preview(args) => preview::cmd(args),
            Commands::TestConnection => test_connection::cmd().await,
        }
    }
}
