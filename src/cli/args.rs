//! Command line argument parsing for the Monogatari CLI using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Monogatari - Japanese text analysis and story streaming
#[derive(Parser, Debug, Clone)]
#[command(name = "monogatari")]
#[command(about = "Japanese text analysis and story streaming for language learners")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct MonogatariArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl MonogatariArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze one Japanese text
    Analyze(AnalyzeArgs),

    /// Replay a story file through the streaming pipeline
    Story(StoryArgs),

    /// Print the generation prompt for a story request
    Prompt(PromptArgs),
}

/// Arguments for analyzing a text
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text to analyze (reads stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Compiled tokenizer system dictionary
    #[arg(
        short = 't',
        long,
        env = "MONOGATARI_TOKENIZER_DICT",
        value_name = "DICT_FILE"
    )]
    pub tokenizer_dict: PathBuf,

    /// Dictionary entries as JSONL
    #[arg(short = 'd', long, env = "MONOGATARI_DICT", value_name = "ENTRY_FILE")]
    pub dict: PathBuf,
}

/// Arguments for streaming a story
#[derive(Parser, Debug, Clone)]
pub struct StoryArgs {
    /// Story text file replayed as the generation stream (stdin when omitted)
    #[arg(value_name = "STORY_FILE")]
    pub story_file: Option<PathBuf>,

    /// Compiled tokenizer system dictionary
    #[arg(
        short = 't',
        long,
        env = "MONOGATARI_TOKENIZER_DICT",
        value_name = "DICT_FILE"
    )]
    pub tokenizer_dict: PathBuf,

    /// Dictionary entries as JSONL
    #[arg(short = 'd', long, env = "MONOGATARI_DICT", value_name = "ENTRY_FILE")]
    pub dict: PathBuf,

    /// Replay chunk size in graphemes
    #[arg(long, default_value = "8")]
    pub chunk_size: usize,
}

/// Arguments for printing the generation prompt
#[derive(Parser, Debug, Clone)]
pub struct PromptArgs {
    /// The student's story request
    #[arg(value_name = "REQUEST")]
    pub request: String,
}
