use repic::commands::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if repic::libs::messages::macros::is_debug_mode() {
        tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env()).init();
    }
    Cli::menu().await
}
