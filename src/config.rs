use crate::cli::Cli;
use clap::Parser;

/// Application configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct Config {
    pub corpus: Vec<String>,
    pub seed: Option<u64>,
    pub tui: bool,
    pub max_size: u64,
    pub quiet: bool,
}

impl Config {
    /// Parse CLI arguments into a Config
    pub fn from_cli() -> Self {
        Self::from(Cli::parse())
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            corpus: cli.corpus,
            seed: cli.seed,
            tui: cli.tui,
            max_size: cli.max_size,
            quiet: cli.quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_MAX_FILE_SIZE;

    #[test]
    fn defaults_without_flags() {
        let config = Config::from(Cli::parse_from(["stark-chat"]));
        assert!(config.corpus.is_empty());
        assert_eq!(config.seed, None);
        assert!(!config.tui);
        assert_eq!(config.max_size, DEFAULT_MAX_FILE_SIZE);
    }

    #[test]
    fn corpus_takes_several_paths() {
        let config = Config::from(Cli::parse_from([
            "stark-chat", "-c", "a.txt", "docs/*.txt", "--seed", "9",
        ]));
        assert_eq!(config.corpus, vec!["a.txt", "docs/*.txt"]);
        assert_eq!(config.seed, Some(9));
    }
}
