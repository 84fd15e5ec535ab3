//! TF-IDF vectorization over a small in-memory document list.
//!
//! Weights follow the common smoothed scheme: raw term counts multiplied by
//! `ln((1 + n) / (1 + df)) + 1`, with every row scaled to unit L2 norm. Rows
//! with no known terms stay all-zero.

use crate::tokenizer;
use std::collections::HashMap;

/// Sparse row: `(term index, weight)` pairs sorted by term index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(|&(_, w)| w == 0.0)
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt()
    }

    pub fn dot(
        &self,
        other: &SparseVector,
    ) -> f64 {
        let (mut i, mut j) = (0usize, 0usize);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_idx, a_w) = self.entries[i];
            let (b_idx, b_w) = other.entries[j];
            match a_idx.cmp(&b_idx) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_w * b_w;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    fn normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, w) in &mut self.entries {
                *w /= norm;
            }
        }
        self
    }
}

/// Cosine similarity; zero when either side is the zero vector.
pub fn cosine_similarity(
    a: &SparseVector,
    b: &SparseVector,
) -> f64 {
    let denom = a.norm() * b.norm();
    if denom == 0.0 {
        return 0.0;
    }
    // Rounding can push identical rows a hair above one.
    (a.dot(b) / denom).min(1.0)
}

/// Vocabulary and idf weights fitted over one document list.
#[derive(Debug, Clone, Default)]
pub struct TfIdfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfIdfVectorizer {
    /// Fit over already-normalized token lists.
    pub fn fit(docs: &[Vec<String>]) -> Self {
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: Vec<usize> = Vec::new();
        for tokens in docs {
            let mut seen: Vec<usize> = Vec::new();
            for token in tokens {
                let next = vocabulary.len();
                let idx = *vocabulary.entry(token.clone()).or_insert(next);
                if idx == doc_freq.len() {
                    doc_freq.push(0);
                }
                if !seen.contains(&idx) {
                    seen.push(idx);
                    doc_freq[idx] += 1;
                }
            }
        }
        let n = docs.len() as f64;
        let idf = doc_freq
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();
        Self { vocabulary, idf }
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Unit-length tf-idf row for `tokens`; unknown terms are ignored.
    pub fn transform(
        &self,
        tokens: &[String],
    ) -> SparseVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for token in tokens {
            if let Some(&idx) = self.vocabulary.get(token) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }
        let mut entries: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(idx, tf)| (idx, tf * self.idf[idx]))
            .collect();
        entries.sort_by_key(|&(idx, _)| idx);
        SparseVector { entries }.normalized()
    }
}

/// Normalizes each text, fits one vocabulary over all of them and returns
/// one row per text in input order.
pub fn fit_transform<S: AsRef<str>>(texts: &[S]) -> (TfIdfVectorizer, Vec<SparseVector>) {
    let docs: Vec<Vec<String>> = texts
        .iter()
        .map(|t| tokenizer::normalize(t.as_ref()))
        .collect();
    let vectorizer = TfIdfVectorizer::fit(&docs);
    let rows = docs.iter().map(|d| vectorizer.transform(d)).collect();
    (vectorizer, rows)
}
