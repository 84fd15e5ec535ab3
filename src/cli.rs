use crate::constants::DEFAULT_MAX_FILE_SIZE;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "stark-chat", version)]
#[command(
    about = "Chat with a text file: every answer is the corpus sentence most similar to \
             what you typed."
)]
pub struct Cli {
    /// Corpus files or globs to load before the first turn.
    #[arg(short = 'c', long = "corpus", num_args(1..))]
    pub corpus: Vec<String>,

    /// Seed for picking greeting replies, for reproducible sessions.
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Open the full-screen chat window instead of the line prompt.
    #[arg(short = 't', long = "tui")]
    pub tui: bool,

    /// Maximum corpus file size in bytes.
    #[arg(short = 'm', long = "max-size", default_value_t = DEFAULT_MAX_FILE_SIZE)]
    pub max_size: u64,

    /// Do not print the welcome banner.
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}
