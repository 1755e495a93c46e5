use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cardfile")]
#[command(about = "Interactive contact book for the terminal", long_about = None)]
pub struct Cli {
    /// Path to the contacts file (overrides the configured location)
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}
