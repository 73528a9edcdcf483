pub mod count;
pub mod generate;
pub mod info;

use anagrm_common::letters::Letters;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "anagrm")]
#[command(version)]
#[command(about = "Every distinct anagram of a word, exactly once.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output; repeat for summary-only mode
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Skip the startup banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show information about this tool
    #[command(alias = "i")]
    Info,
    /// Count distinct anagrams without generating them
    #[command(alias = "c")]
    Count { letters: Letters },
    /// Generate every distinct anagram of the given letters
    #[command(alias = "g")]
    Generate { letters: Letters },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
