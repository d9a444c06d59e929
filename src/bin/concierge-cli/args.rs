use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "concierge",
    about = "Ask the restaurant assistant about the menu, grounded on the search index"
)]
pub struct CliArgs {
    /// Ask a single question and exit
    #[arg(long, short = 'p')]
    pub prompt: Option<String>,
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
    /// File whose contents replace the default persona
    #[arg(long)]
    pub persona: Option<PathBuf>,
    /// Search index to ground answers on
    #[arg(long)]
    pub index: Option<String>,
}
