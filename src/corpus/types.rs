use chrono::{DateTime, Local};
use std::path::PathBuf;

/// Ordered candidate answers taken from the most recently loaded document.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    sentences: Vec<String>,
    sources: Vec<PathBuf>,
    loaded_at: Option<DateTime<Local>>,
}

impl Corpus {
    pub fn new(
        sentences: Vec<String>,
        sources: Vec<PathBuf>,
    ) -> Self {
        Self {
            sentences,
            sources,
            loaded_at: Some(Local::now()),
        }
    }

    /// Corpus built straight from sentences, with no backing file.
    pub fn from_sentences<I, S>(sentences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(sentences.into_iter().map(Into::into).collect(), Vec::new())
    }

    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    pub fn loaded_at(&self) -> Option<DateTime<Local>> {
        self.loaded_at
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// One-line description for status output.
    pub fn summary(&self) -> String {
        match self.loaded_at {
            None => "no corpus loaded".to_string(),
            Some(ts) => {
                let names: Vec<String> =
                    self.sources.iter().map(|p| p.display().to_string()).collect();
                let from = if names.is_empty() {
                    String::new()
                } else {
                    format!(" from {}", names.join(", "))
                };
                format!(
                    "{} sentences{} (loaded {})",
                    self.sentences.len(),
                    from,
                    ts.format("%H:%M:%S")
                )
            }
        }
    }
}
