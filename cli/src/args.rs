use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "cardsift",
    about = "Fuzzy-filter project cards from the command line",
    version
)]
pub struct Cli {
    /// JSON file holding the project list
    #[arg(long, short)]
    pub projects: PathBuf,

    /// TOML config (defaults apply when the file is missing)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Print one JSON object per query instead of plain text
    #[arg(long)]
    pub json: bool,

    /// Also list hidden cards in plain output
    #[arg(long)]
    pub show_hidden: bool,

    /// Queries to apply in order; read from stdin, one per line, when omitted
    pub queries: Vec<String>,
}
