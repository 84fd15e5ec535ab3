//! Picks the corpus sentence most similar to a query.
//!
//! The query is scored inside a transient working list (corpus sentences
//! followed by the query) so the vocabulary and idf weights cover exactly
//! the texts being compared. The corpus itself is only ever borrowed.
//!
//! Selection ignores the query's own row by position. Among the corpus rows
//! the highest cosine wins and ties go to the earliest sentence.

use crate::constants::{MSG_NO_CORPUS, MSG_NOT_UNDERSTOOD};
use crate::tfidf::{self, cosine_similarity};
use std::cmp::Ordering;
use tracing::debug;

/// One scored corpus sentence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match {
    pub index: usize,
    pub score: f64,
}

/// Scores every corpus sentence against `query`, best first. Equal scores
/// keep document order.
pub fn score_all(
    corpus: &[String],
    query: &str,
) -> Vec<Match> {
    if corpus.is_empty() {
        return Vec::new();
    }
    let mut working: Vec<&str> = corpus.iter().map(String::as_str).collect();
    working.push(query);
    let (vectorizer, rows) = tfidf::fit_transform(&working);
    let Some((query_row, sentence_rows)) = rows.split_last() else {
        return Vec::new();
    };
    debug!(
        "scored {} sentences over {} terms",
        sentence_rows.len(),
        vectorizer.vocabulary_len()
    );

    let mut matches: Vec<Match> = sentence_rows
        .iter()
        .enumerate()
        .map(|(index, row)| Match {
            index,
            score: cosine_similarity(query_row, row),
        })
        .collect();
    // sort_by is stable, so ties stay in ascending index order
    matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    matches
}

/// Top `k` matches, best first.
pub fn rank(
    corpus: &[String],
    query: &str,
    k: usize,
) -> Vec<Match> {
    let mut matches = score_all(corpus, query);
    matches.truncate(k);
    matches
}

/// The best match, or `None` when the corpus is empty or nothing overlaps.
pub fn best_match(
    corpus: &[String],
    query: &str,
) -> Option<Match> {
    rank(corpus, query, 1)
        .into_iter()
        .next()
        .filter(|m| m.score > 0.0)
}

/// Answers `query` with a corpus sentence or one of the fixed fallbacks.
pub fn respond(
    corpus: &[String],
    query: &str,
) -> String {
    if corpus.is_empty() {
        return MSG_NO_CORPUS.to_string();
    }
    match best_match(corpus, query) {
        Some(m) => {
            debug!("best match #{} score {:.4}", m.index, m.score);
            corpus[m.index].clone()
        }
        None => MSG_NOT_UNDERSTOOD.to_string(),
    }
}
