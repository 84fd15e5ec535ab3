use crate::config::Config;
use crate::constants::{
    FAREWELL_INPUT, MSG_EMPTY_FILE, MSG_FAREWELL, MSG_LOADED, MSG_NO_FILE, MSG_WELCOME,
    THANKS_INPUTS,
};
use crate::corpus::{Corpus, LoadError, load_corpus};
use crate::greeting::match_greeting;
use crate::responder::{self, respond};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::path::Path;
use tracing::{debug, warn};

pub const HELP: &str = "Commands: /load <file or glob>... replaces the corpus, /status shows \
                        what is loaded, /help prints this. Say bye to leave.";

/// One chat session: the current corpus plus the turn dispatch policy.
pub struct Session<R: Rng = StdRng> {
    corpus: Corpus,
    rng: R,
    max_size: u64,
    open: bool,
}

impl Session<StdRng> {
    /// Builds a session from config, seeding greetings when a seed is given.
    pub fn from_config(config: &Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Session::with_rng(rng, config.max_size)
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(
        rng: R,
        max_size: u64,
    ) -> Self {
        Self {
            corpus: Corpus::default(),
            rng,
            max_size,
            open: true,
        }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// False once the user has said goodbye.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Replaces the corpus from `paths`; on failure the old corpus is kept.
    /// Returns the line to show the user.
    pub fn load(
        &mut self,
        paths: &[String],
    ) -> String {
        match load_corpus(paths, self.max_size) {
            Ok(corpus) => {
                self.corpus = corpus;
                MSG_LOADED.to_string()
            }
            Err(LoadError::NoPath) => MSG_NO_FILE.to_string(),
            Err(LoadError::Empty) => MSG_EMPTY_FILE.to_string(),
            Err(e) => {
                warn!("corpus load failed: {e}");
                format!("Failed to load corpus. Error: {e}")
            }
        }
    }

    /// Runs one turn. Blank input and input after goodbye produce nothing.
    pub fn handle(
        &mut self,
        input: &str,
    ) -> Option<String> {
        let text = input.trim();
        if !self.open || text.is_empty() {
            return None;
        }
        let lowered = text.to_lowercase();

        if lowered == FAREWELL_INPUT {
            self.open = false;
            return Some(MSG_FAREWELL.to_string());
        }
        if THANKS_INPUTS.contains(&lowered.as_str()) {
            return Some(MSG_WELCOME.to_string());
        }
        if let Some(command) = text.strip_prefix('/') {
            return Some(self.command(command));
        }
        if let Some(reply) = match_greeting(text, &mut self.rng) {
            return Some(reply.to_string());
        }

        if tracing::enabled!(tracing::Level::DEBUG) {
            for m in responder::rank(self.corpus.sentences(), text, 3) {
                debug!("candidate #{} score {:.4}", m.index, m.score);
            }
        }
        Some(respond(self.corpus.sentences(), text))
    }

    fn command(
        &mut self,
        command: &str,
    ) -> String {
        let (name, rest) = command
            .split_once(char::is_whitespace)
            .map(|(n, r)| (n, r.trim()))
            .unwrap_or((command, ""));
        match name.to_lowercase().as_str() {
            "load" => {
                let paths = split_load_args(rest);
                self.load(&paths)
            }
            "status" => self.corpus.summary(),
            "help" => HELP.to_string(),
            other => format!("Unknown command /{other}. Type /help for the list."),
        }
    }
}

// An existing path is taken whole so names with spaces work; anything else
// is a whitespace-separated list of paths or globs.
fn split_load_args(rest: &str) -> Vec<String> {
    if rest.is_empty() {
        return Vec::new();
    }
    if Path::new(rest).exists() {
        return vec![rest.to_string()];
    }
    rest.split_whitespace().map(str::to_string).collect()
}
