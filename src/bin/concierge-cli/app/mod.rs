mod client;
mod command;
mod render;
mod repl;

use std::sync::Arc;

use clap::Parser;
use tokio::io::BufReader;

use grounded_chat::engine::ConversationEngine;
use grounded_chat::GroundedChatProvider;

use crate::args::CliArgs;
use crate::config::load_config;
use crate::logging::init_logging;

pub async fn run() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let loaded = load_config(args.config.clone())?;
    let _logger = init_logging(&loaded.config.logging, &loaded.paths)?;

    let persona = client::resolve_persona(&args, &loaded.config)?;
    let provider: Arc<dyn GroundedChatProvider> =
        Arc::new(client::build_client(&args, &loaded.config)?);

    if let Some(prompt) = args.prompt.as_deref() {
        let mut engine = ConversationEngine::new(provider, persona);
        if let Some(result) = engine.submit(prompt).await {
            println!("{}", render::render_result(&result));
        }
        return Ok(());
    }

    let stdin = BufReader::new(tokio::io::stdin());
    repl::run_repl(
        provider,
        &persona,
        loaded.config.chat.history_display,
        stdin,
        &mut std::io::stdout(),
    )
    .await
}
