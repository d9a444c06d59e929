#[path = "concierge-cli/app/mod.rs"]
mod app;
#[path = "concierge-cli/args.rs"]
mod args;
#[path = "concierge-cli/config/mod.rs"]
mod config;
#[path = "concierge-cli/logging.rs"]
mod logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    app::run().await
}
